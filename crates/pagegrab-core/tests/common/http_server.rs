//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed per-path responses; unknown paths get 404. Only GET is
//! handled, which is all the batch fetcher ever sends.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// A canned response for one path.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
    /// `Location` header target for redirect statuses.
    pub location: Option<String>,
}

impl Response {
    pub fn ok(body: &[u8]) -> Self {
        Self {
            status: 200,
            body: body.to_vec(),
            location: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            location: None,
        }
    }

    pub fn redirect(target: &str) -> Self {
        Self {
            status: 302,
            body: Vec::new(),
            location: Some(target.to_string()),
        }
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). The server runs until the
/// process exits.
pub fn start(routes: HashMap<String, Response>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Response>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match parse_request_path(request) {
        Some(p) => p,
        None => return,
    };

    let not_found = Response::status(404);
    let response = routes.get(path).unwrap_or(&not_found);

    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        response.status,
        reason(response.status),
        response.body.len()
    );
    if let Some(target) = &response.location {
        head.push_str(&format!("Location: {}\r\n", target));
    }
    head.push_str("\r\n");

    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

/// Extracts the path from a request line like "GET /a/b HTTP/1.1".
fn parse_request_path(request: &str) -> Option<&str> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    if !method.eq_ignore_ascii_case("GET") {
        return None;
    }
    parts.next()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
