pub mod attempt;
pub mod check;
pub mod craving;
pub mod diary;
pub mod milestones;
pub mod notify;
pub mod savings;
pub mod settings;
pub mod status;
