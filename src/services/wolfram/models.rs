// WolframAlpha Launcher - Response Models
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Data structures for the WolframAlpha v2 query response
//!
//! The API answers with an XML document shaped like:
//!
//! ```xml
//! <queryresult success="true" error="false" numpods="2">
//!   <pod title="Input interpretation" id="Input" primary="false">
//!     <subpod title=""><plaintext>2 + 2</plaintext></subpod>
//!   </pod>
//!   <pod title="Result" id="Result" primary="true">
//!     <subpod title=""><plaintext>4</plaintext></subpod>
//!   </pod>
//! </queryresult>
//! ```
//!
//! Only the parts the plugin renders are modelled.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::Serialize;

use super::error::{WolframError, WolframResult};

/// Raw answer from the provider endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Parsed `<queryresult>` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub success: bool,
    pub error: bool,
    /// Every pod in document order, wherever it appears
    pub pods: Vec<Pod>,
}

/// A titled section of the answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pod {
    pub id: String,
    pub title: String,
    pub primary: bool,
    pub subpods: Vec<SubPod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubPod {
    pub title: String,
    /// `None` when the sub-pod has no `<plaintext>` element at all
    pub plaintext: Option<String>,
}

impl Pod {
    /// Plain-text leaves of every sub-pod, in document order
    pub fn plaintexts(&self) -> impl Iterator<Item = &str> {
        self.subpods.iter().filter_map(|subpod| subpod.plaintext.as_deref())
    }
}

impl QueryResult {
    /// Pods flagged `primary="true"`
    pub fn primary_pods(&self) -> impl Iterator<Item = &Pod> {
        self.pods.iter().filter(|pod| pod.primary)
    }

    /// Parse a provider XML body
    pub fn from_xml(xml: &str) -> WolframResult<Self> {
        let mut reader = Reader::from_str(xml);
        let mut result = QueryResult::default();

        let mut depth = 0usize;
        let mut seen_root = false;
        let mut pod: Option<Pod> = None;
        let mut subpod: Option<SubPod> = None;
        let mut plaintext: Option<String> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if depth == 0 {
                        if seen_root {
                            return Err(WolframError::malformed("multiple root elements"));
                        }
                        seen_root = true;
                    }
                    depth += 1;
                    match e.name().as_ref() {
                        b"queryresult" => read_queryresult(&e, &mut result)?,
                        b"pod" => {
                            if let Some(outer) = pod.take() {
                                result.pods.push(outer);
                            }
                            pod = Some(read_pod(&e)?);
                        }
                        b"subpod" if pod.is_some() => {
                            subpod = Some(SubPod {
                                title: attribute(&e, b"title")?.unwrap_or_default(),
                                plaintext: None,
                            });
                        }
                        b"plaintext" if subpod.is_some() => {
                            plaintext = Some(String::new());
                        }
                        _ => {}
                    }
                }
                Event::Empty(e) => {
                    if depth == 0 {
                        if seen_root {
                            return Err(WolframError::malformed("multiple root elements"));
                        }
                        seen_root = true;
                    }
                    match e.name().as_ref() {
                        b"queryresult" => read_queryresult(&e, &mut result)?,
                        b"pod" => result.pods.push(read_pod(&e)?),
                        b"subpod" => {
                            if let Some(current) = pod.as_mut() {
                                current.subpods.push(SubPod {
                                    title: attribute(&e, b"title")?.unwrap_or_default(),
                                    plaintext: None,
                                });
                            }
                        }
                        b"plaintext" => {
                            if let Some(current) = subpod.as_mut() {
                                current.plaintext = Some(String::new());
                            }
                        }
                        _ => {}
                    }
                }
                Event::Text(e) => {
                    if let Some(buffer) = plaintext.as_mut() {
                        buffer.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(buffer) = plaintext.as_mut() {
                        buffer.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::End(e) => {
                    depth = depth.saturating_sub(1);
                    match e.name().as_ref() {
                        b"plaintext" => {
                            if let (Some(text), Some(current)) = (plaintext.take(), subpod.as_mut()) {
                                current.plaintext = Some(text);
                            }
                        }
                        b"subpod" => {
                            if let (Some(finished), Some(current)) = (subpod.take(), pod.as_mut()) {
                                current.subpods.push(finished);
                            }
                        }
                        b"pod" => {
                            if let Some(finished) = pod.take() {
                                result.pods.push(finished);
                            }
                        }
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(WolframError::malformed("document has no root element"));
        }
        if depth != 0 {
            return Err(WolframError::malformed("unexpected end of document"));
        }

        Ok(result)
    }
}

fn read_queryresult(e: &BytesStart<'_>, result: &mut QueryResult) -> WolframResult<()> {
    result.success = attribute(e, b"success")?.is_some_and(|v| v == "true");
    result.error = attribute(e, b"error")?.is_some_and(|v| v == "true");
    Ok(())
}

fn read_pod(e: &BytesStart<'_>) -> WolframResult<Pod> {
    Ok(Pod {
        id: attribute(e, b"id")?.unwrap_or_default(),
        title: attribute(e, b"title")?.unwrap_or_default(),
        primary: attribute(e, b"primary")?.is_some_and(|v| v == "true"),
        subpods: Vec::new(),
    })
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> WolframResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == name {
            let value: Cow<'_, str> = attr.unescape_value()?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<queryresult success='true' error='false' numpods='3'>
  <pod title='Input interpretation' scanner='Identity' id='Input' position='100' primary='true'>
    <subpod title=''>
      <plaintext>2 + 2</plaintext>
    </subpod>
  </pod>
  <pod title='Result' scanner='Simplification' id='Result' position='200' primary='true'>
    <subpod title=''>
      <plaintext>4</plaintext>
    </subpod>
  </pod>
  <pod title='Number name' scanner='Integer' id='NumberName' position='300'>
    <subpod title=''>
      <plaintext>four</plaintext>
    </subpod>
  </pod>
</queryresult>"#;

    #[test]
    fn test_parse_sample_document() {
        let result = QueryResult::from_xml(SAMPLE).unwrap();
        assert!(result.success);
        assert!(!result.error);
        assert_eq!(result.pods.len(), 3);

        let ids: Vec<&str> = result.pods.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["Input", "Result", "NumberName"]);

        assert_eq!(result.pods[1].title, "Result");
        assert_eq!(result.pods[1].plaintexts().collect::<Vec<_>>(), ["4"]);
        assert!(!result.pods[2].primary);
        assert_eq!(result.primary_pods().count(), 2);
    }

    #[test]
    fn test_entities_and_cdata_are_decoded() {
        let xml = "<queryresult><pod id='a' title='A &amp; B' primary='true'>\
            <subpod title=''><plaintext>x &lt; y</plaintext></subpod>\
            <subpod title=''><plaintext><![CDATA[p & q]]></plaintext></subpod>\
            </pod></queryresult>";
        let result = QueryResult::from_xml(xml).unwrap();
        let pod = &result.pods[0];
        assert_eq!(pod.title, "A & B");
        assert_eq!(pod.plaintexts().collect::<Vec<_>>(), ["x < y", "p & q"]);
    }

    #[test]
    fn test_empty_plaintext_and_missing_plaintext() {
        let xml = "<queryresult><pod id='Plot' title='Plot' primary='true'>\
            <subpod title='a'><plaintext/></subpod>\
            <subpod title='b'><img src='x.gif'/></subpod>\
            </pod></queryresult>";
        let result = QueryResult::from_xml(xml).unwrap();
        let pod = &result.pods[0];
        assert_eq!(pod.subpods.len(), 2);
        assert_eq!(pod.subpods[0].plaintext.as_deref(), Some(""));
        assert_eq!(pod.subpods[1].plaintext, None);
    }

    #[test]
    fn test_failed_query_has_no_pods() {
        let xml = "<queryresult success='false' error='false' numpods='0'/>";
        let result = QueryResult::from_xml(xml).unwrap();
        assert!(!result.success);
        assert!(result.pods.is_empty());
    }

    #[test]
    fn test_malformed_documents_are_rejected() {
        assert!(QueryResult::from_xml("").is_err());
        assert!(QueryResult::from_xml("not xml at all").is_err());
        assert!(QueryResult::from_xml("<queryresult><pod></queryresult>").is_err());
        assert!(QueryResult::from_xml("<queryresult><pod id='x'>").is_err());
    }

    #[test]
    fn test_provider_response_status() {
        assert!(ProviderResponse::new(200, "").is_ok());
        assert!(!ProviderResponse::new(403, "").is_ok());
    }
}
