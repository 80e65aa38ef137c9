//! XML event driver for the label extractor

use quick_xml::events::Event;
use quick_xml::Reader;
use std::fmt::Display;

use crate::{
    error::{CoreError, Result},
    extractor::{Extraction, ExtractorOptions, LabelExtractor},
};

/// Extract the labeled sequence of one markup document.
///
/// Element names are matched on their local part, so `tei:title` scopes
/// like `title`. Empty elements count as a start immediately followed by an
/// end. Any reader error aborts the whole document.
pub fn extract_labels(markup: &str, options: &ExtractorOptions) -> Result<Extraction> {
    let mut reader = Reader::from_str(markup);
    let mut extractor = LabelExtractor::new(options.clone());

    loop {
        let event = reader
            .read_event()
            .map_err(|e| markup_error(reader.buffer_position() as u64, e))?;

        match event {
            Event::Start(element) => {
                let local = element.local_name();
                extractor.start_element(element_name(local.as_ref())?);
            }
            Event::Empty(element) => {
                let local = element.local_name();
                let name = element_name(local.as_ref())?;
                extractor.start_element(name);
                extractor.end_element(name);
            }
            Event::End(element) => {
                let local = element.local_name();
                extractor.end_element(element_name(local.as_ref())?);
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| markup_error(reader.buffer_position() as u64, e))?;
                extractor.characters(&text);
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                let text =
                    std::str::from_utf8(&bytes).map_err(|e| CoreError::Encoding(e.to_string()))?;
                extractor.characters(text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(extractor.finish())
}

fn element_name(name: &[u8]) -> Result<&str> {
    std::str::from_utf8(name).map_err(|e| CoreError::Encoding(e.to_string()))
}

fn markup_error(position: u64, error: impl Display) -> CoreError {
    CoreError::Markup {
        position,
        message: error.to_string(),
    }
}
