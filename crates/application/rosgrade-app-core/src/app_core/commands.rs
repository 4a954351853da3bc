use bytes::Bytes;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Upload
    SelectFile { name: String, data: Bytes },

    // Grading
    StartValidation,
    StartSimulation,

    // Notices
    ShowNotice(String),
    DismissNotice,
}
