// WolframAlpha Launcher - Provider Client
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Blocking client for the WolframAlpha v2 query endpoint

use crate::log_debug;

use super::error::WolframResult;
use super::models::ProviderResponse;

/// One outbound query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderRequest<'a> {
    pub endpoint: &'a str,
    pub input: &'a str,
    pub app_id: &'a str,
}

/// Anything able to run a query against the provider.
///
/// The plugin only ever needs the status code and the body, so tests can
/// stand in for the network with a canned response.
pub trait Provider {
    fn fetch(&self, request: &ProviderRequest<'_>) -> WolframResult<ProviderResponse>;
}

impl<P: Provider + ?Sized> Provider for &P {
    fn fetch(&self, request: &ProviderRequest<'_>) -> WolframResult<ProviderResponse> {
        (**self).fetch(request)
    }
}

/// HTTP implementation backed by `reqwest::blocking`
pub struct HttpProvider {
    client: reqwest::blocking::Client,
}

impl Default for HttpProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpProvider {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("wolfram-launcher/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self { client }
    }
}

impl Provider for HttpProvider {
    fn fetch(&self, request: &ProviderRequest<'_>) -> WolframResult<ProviderResponse> {
        log_debug!("WolframAlpha query: {} (endpoint: {})", request.input, request.endpoint);

        let response = self.client
            .get(request.endpoint)
            .query(&[("input", request.input), ("appid", request.app_id)])
            .send()?;

        let status = response.status().as_u16();
        log_debug!("WolframAlpha response status: {}", status);

        let body = response.text()?;
        Ok(ProviderResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one HTTP response and hand back the raw request head
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/v2/query", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let reply = format!(
                "{}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(reply.as_bytes()).unwrap();
            String::from_utf8_lossy(&head).into_owned()
        });

        (endpoint, handle)
    }

    #[test]
    fn test_fetch_sends_input_and_appid() {
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK", "<queryresult success='true'/>");
        let provider = HttpProvider::new();

        let response = provider
            .fetch(&ProviderRequest { endpoint: &endpoint, input: "2 + 2", app_id: "DEMO-KEY" })
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "<queryresult success='true'/>");

        let head = server.join().unwrap();
        let request_line = head.lines().next().unwrap_or_default().to_string();
        assert!(request_line.starts_with("GET /v2/query?"), "{}", request_line);
        assert!(request_line.contains("input=2+%2B+2"), "{}", request_line);
        assert!(request_line.contains("appid=DEMO-KEY"), "{}", request_line);
    }

    #[test]
    fn test_fetch_reports_non_ok_status() {
        let (endpoint, server) = serve_once("HTTP/1.1 403 Forbidden", "");
        let provider = HttpProvider::new();

        let response = provider
            .fetch(&ProviderRequest { endpoint: &endpoint, input: "pi", app_id: "bad" })
            .unwrap();
        server.join().unwrap();

        assert_eq!(response.status, 403);
        assert!(!response.is_ok());
    }
}
