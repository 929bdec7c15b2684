use crate::document::Message;

/// Render a document's messages as catalog text, one `msgid "<source>"` line
/// per message in document order.
///
/// The export format currently carries source text only. The value source for
/// any emitted translation is [`Message::winning_text`]: the proposal with
/// the highest vote count, ties broken by earliest creation.
pub fn encode<'a, I>(messages: I) -> String
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut out = String::new();
    for message in messages {
        out.push_str("msgid \"");
        out.push_str(message.source_text());
        out.push_str("\"\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, NewDocument};

    fn fixture() -> Document {
        let fields = NewDocument {
            name: "fixture".into(),
            language_from: "en".into(),
            language_to: "es".into(),
            ..NewDocument::default()
        };
        Document::create(fields, "author-1").unwrap()
    }

    #[test]
    fn one_msgid_line_per_message_in_order() {
        let mut doc = fixture();
        doc.append_message("Hello", Some("Hola".into()));
        doc.append_message("Goodbye", Some("Adios".into()));

        assert_eq!(
            encode(doc.messages()),
            "msgid \"Hello\"\nmsgid \"Goodbye\"\n"
        );
    }

    #[test]
    fn empty_document_encodes_to_empty_text() {
        let doc = fixture();
        assert_eq!(encode(doc.messages()), "");
    }

    #[test]
    fn source_text_is_emitted_verbatim() {
        let mut doc = fixture();
        doc.append_message("say \\\"hi\\\"", None);
        assert_eq!(encode(doc.messages()), "msgid \"say \\\"hi\\\"\"\n");
    }
}
