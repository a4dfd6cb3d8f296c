//! Minimal XDSL (GeNIe/SMILE) reader.
//!
//! Only extracts what ingestion needs: the children of `<nodes>` (id, tag,
//! `<state id>`, `<parents>`, `<probabilities>` / `<utilities>`) and the
//! `<node id>` entries under `<extensions>` with their `<position>`.
//! Everything else in the document is skipped.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::{debug, instrument};

use crate::error::{BnError, Result};
use crate::types::{ExtensionElement, NodeElement, ParsedNetwork};

/// Which part of the document the reader is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
  Outside,
  Nodes,
  Extensions,
}

/// Field that the next text event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
  Parents,
  Values,
  Position,
}

/// Reads and parses an `.xdsl` file.
#[instrument(level = "trace")]
pub fn read_xdsl(path: &Path) -> Result<ParsedNetwork> {
  let src = std::fs::read_to_string(path)?;
  parse_xdsl(&src)
}

/// Parses XDSL source into node and extension elements, in document order.
#[instrument(level = "trace", skip(src))]
pub fn parse_xdsl(src: &str) -> Result<ParsedNetwork> {
  // Untrimmed: text around an entity reference arrives in separate events and
  // must be joined as written.
  let mut reader = Reader::from_str(src);

  let mut parsed = ParsedNetwork::default();
  let mut section = Section::Outside;
  // nesting depth below <nodes>
  let mut depth = 0usize;
  let mut node: Option<NodeElement> = None;
  let mut ext: Option<ExtensionElement> = None;
  let mut target: Option<TextTarget> = None;
  let mut text = String::new();

  loop {
    let event = reader
      .read_event()
      .map_err(|e| BnError::Xml(format!("at byte {}: {e}", reader.error_position())))?;
    match event {
      Event::Eof => break,
      Event::Start(e) => {
        let name = tag_name(&e);
        match section {
          Section::Outside => match name.as_str() {
            "nodes" => section = Section::Nodes,
            "extensions" => section = Section::Extensions,
            _ => {}
          },
          Section::Nodes => {
            depth += 1;
            if depth == 1 {
              node = Some(node_element(&e, name)?);
            } else if depth == 2 {
              target = match name.as_str() {
                "parents" => Some(TextTarget::Parents),
                "probabilities" | "utilities" => Some(TextTarget::Values),
                _ => None,
              };
              if name == "state"
                && let Some(n) = node.as_mut()
              {
                n.states.push(required_attr(&e, "id")?);
              }
            }
          }
          Section::Extensions => match name.as_str() {
            "node" => {
              ext = Some(ExtensionElement {
                id: required_attr(&e, "id")?,
                position: None,
              })
            }
            "position" if ext.is_some() => target = Some(TextTarget::Position),
            _ => {}
          },
        }
      }
      Event::Empty(e) => {
        let name = tag_name(&e);
        match section {
          Section::Nodes if depth == 0 => parsed.nodes.push(node_element(&e, name)?),
          Section::Nodes if depth == 1 && name == "state" => {
            if let Some(n) = node.as_mut() {
              n.states.push(required_attr(&e, "id")?);
            }
          }
          Section::Extensions if name == "node" => parsed.extensions.push(ExtensionElement {
            id: required_attr(&e, "id")?,
            position: None,
          }),
          _ => {}
        }
      }
      Event::Text(t) if target.is_some() => text.push_str(&String::from_utf8_lossy(&t)),
      Event::GeneralRef(r) if target.is_some() => {
        text.push_str(&resolve_entity(&r)?)
      }
      Event::End(e) => {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        match section {
          Section::Nodes if depth == 0 && name == "nodes" => section = Section::Outside,
          Section::Nodes => {
            if depth == 2 {
              flush(target.take(), &mut text, node.as_mut(), ext.as_mut());
            } else if depth == 1
              && let Some(n) = node.take()
            {
              debug!(id = %n.id, tag = %n.tag, "read node element");
              parsed.nodes.push(n);
            }
            depth = depth.saturating_sub(1);
          }
          Section::Extensions => match name.as_str() {
            "extensions" => section = Section::Outside,
            "position" => flush(target.take(), &mut text, node.as_mut(), ext.as_mut()),
            "node" => {
              if let Some(x) = ext.take() {
                parsed.extensions.push(x);
              }
            }
            _ => {}
          },
          Section::Outside => {}
        }
      }
      _ => {}
    }
  }

  Ok(parsed)
}

fn tag_name(e: &BytesStart<'_>) -> String {
  String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// A node element with its id and tag; lists are filled in by later events.
fn node_element(e: &BytesStart<'_>, tag: String) -> Result<NodeElement> {
  Ok(NodeElement {
    id: required_attr(e, "id")?,
    tag,
    ..NodeElement::default()
  })
}

fn required_attr(e: &BytesStart<'_>, key: &str) -> Result<String> {
  let attr = e
    .try_get_attribute(key)
    .map_err(|err| BnError::Xml(err.to_string()))?
    .ok_or_else(|| BnError::Xml(format!("<{}> without '{key}' attribute", tag_name(e))))?;
  attr
    .unescape_value()
    .map(|v| v.into_owned())
    .map_err(|err| BnError::Xml(err.to_string()))
}

/// Expands a character reference (`&#38;`, `&#x26;`) or a predefined entity (`&amp;`, ..).
fn resolve_entity(r: &BytesRef<'_>) -> Result<String> {
  if let Some(ch) = r.resolve_char_ref().map_err(|e| BnError::Xml(e.to_string()))? {
    return Ok(ch.to_string());
  }
  let name = String::from_utf8_lossy(r);
  resolve_predefined_entity(&name)
    .map(str::to_string)
    .ok_or_else(|| BnError::Xml(format!("unknown entity '&{name};'")))
}

/// Moves the text collected for `target` into its field.
fn flush(
  target: Option<TextTarget>,
  text: &mut String,
  node: Option<&mut NodeElement>,
  ext: Option<&mut ExtensionElement>,
) {
  let chunk = std::mem::take(text);
  let chunk = chunk.trim();
  if chunk.is_empty() {
    return;
  }
  match target {
    Some(TextTarget::Parents) => append(node.map(|n| &mut n.parents), chunk),
    Some(TextTarget::Values) => append(node.map(|n| &mut n.values), chunk),
    Some(TextTarget::Position) => append(ext.map(|x| &mut x.position), chunk),
    None => {}
  }
}

/// Appends a text chunk to an optional field, separated by a space.
fn append(field: Option<&mut Option<String>>, text: &str) {
  if let Some(field) = field {
    match field {
      Some(existing) => {
        existing.push(' ');
        existing.push_str(text);
      }
      None => *field = Some(text.to_string()),
    }
  }
}
