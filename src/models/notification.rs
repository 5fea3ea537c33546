/// Text posted to the chat webhook for one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub header: String,
    pub body: String,
}

impl NotificationMessage {
    pub fn text(&self) -> String {
        format!("{}{}", self.header, self.body)
    }
}
