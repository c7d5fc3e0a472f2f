pub const ECHO_COMMAND: &str = "/echo";
pub const ASK_COMMAND: &str = "/ask";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlashCommandPayload {
    pub command: String,
    pub text: String,
    pub channel_id: String,
    pub user_id: String,
    pub trigger_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlashCommand {
    /// `text` is kept verbatim; it doubles as the glossary lookup key.
    Echo { text: String },
    Ask,
    Unknown { command: String },
}

pub fn parse_slash_command(payload: &SlashCommandPayload) -> SlashCommand {
    match payload.command.as_str() {
        ECHO_COMMAND => SlashCommand::Echo { text: payload.text.clone() },
        ASK_COMMAND => SlashCommand::Ask,
        other => SlashCommand::Unknown { command: other.to_owned() },
    }
}

pub fn echo_confirmation_text(text: &str) -> String {
    format!("あなた今「{text}」と言いったかい？")
}
