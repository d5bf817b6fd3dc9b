/// Edge kind of the questionnaire graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Offers,   // Question → Answer
    LeadsTo,  // Answer → child Question
    Triggers, // Answer → Result
}
