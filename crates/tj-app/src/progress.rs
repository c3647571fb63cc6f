#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    ResolvingConfig,
    CheckingStore,
    LoadingStoredResult,
    Simulating,
    SavingResults,
    Completed,
}

impl RunStage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ResolvingConfig => "resolving config",
            Self::CheckingStore => "checking store",
            Self::LoadingStoredResult => "loading stored result",
            Self::Simulating => "simulating",
            Self::SavingResults => "saving results",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
}

impl RunProgressEvent {
    pub fn stage(stage: RunStage, elapsed_wall_s: f64, message: Option<String>) -> Self {
        Self {
            stage,
            elapsed_wall_s,
            message,
        }
    }
}
