use serde::Serialize;

const UTF8_CHARSET: &str = "UTF-8";

/// The send-email document expected by the email API.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailRequest<'a> {
    pub source: &'a str,
    pub destination: Destination<'a>,
    pub message: Message<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination<'a> {
    pub to_addresses: Vec<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message<'a> {
    pub subject: Content<'a>,
    pub body: Body<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Body<'a> {
    pub text: Content<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content<'a> {
    pub charset: &'a str,
    pub data: &'a str,
}

impl<'a> EmailRequest<'a> {
    /// Offer emails are self-addressed: the configured mailbox is both the
    /// source and the only destination.
    pub fn new(mailbox: &'a str, subject: &'a str, text_body: &'a str) -> Self {
        Self {
            source: mailbox,
            destination: Destination {
                to_addresses: vec![mailbox],
            },
            message: Message {
                subject: Content {
                    charset: UTF8_CHARSET,
                    data: subject,
                },
                body: Body {
                    text: Content {
                        charset: UTF8_CHARSET,
                        data: text_body,
                    },
                },
            },
        }
    }
}
