/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde_json::json;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// A canned HTTP response served by the fixture server.
pub(crate) struct CannedResponse {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

#[allow(dead_code)]
impl CannedResponse {
    pub(crate) fn json(value: &serde_json::Value) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: value.to_string().into_bytes(),
        }
    }

    pub(crate) fn bytes(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: "application/octet-stream",
            body,
        }
    }

    pub(crate) fn error(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub(crate) fn text(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
        }
    }
}

/// Minimal single-threaded HTTP server replaying canned responses, keyed by
/// request target (path plus query). Every received target is logged so
/// tests can assert on the exact URLs the client built, including the
/// absence of any request at all.
pub(crate) struct FixtureServer {
    base_url: String,
    routes: Arc<Mutex<HashMap<String, CannedResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl FixtureServer {
    pub(crate) fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
        let addr = listener.local_addr().expect("fixture server address");
        let routes: Arc<Mutex<HashMap<String, CannedResponse>>> =
            Arc::new(Mutex::new(HashMap::new()));
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        {
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests);
            thread::spawn(move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { break };
                    let _ = handle_connection(stream, &routes, &requests);
                }
            });
        }

        Self {
            base_url: format!("http://{addr}"),
            routes,
            requests,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request target on this server.
    pub(crate) fn url(&self, target: &str) -> String {
        format!("{}{target}", self.base_url)
    }

    pub(crate) fn route(&self, target: &str, response: CannedResponse) {
        self.routes
            .lock()
            .unwrap()
            .insert(target.to_string(), response);
    }

    /// Request targets received so far, in order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle_connection(
    stream: TcpStream,
    routes: &Mutex<HashMap<String, CannedResponse>>,
    requests: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut stream = stream;
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let Some(target) = request_line.split_whitespace().nth(1) else {
        return Ok(());
    };
    let target = target.to_string();

    // Drain the headers; fixtures only serve GET so there is no body.
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 || line == "\r\n" || line == "\n" {
            break;
        }
    }

    requests.lock().unwrap().push(target.clone());

    let routes = routes.lock().unwrap();
    let (status, content_type, body) = match routes.get(&target) {
        Some(resp) => (resp.status, resp.content_type, resp.body.as_slice()),
        None => (404, "text/plain", "no fixture for target".as_bytes()),
    };
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Fixture",
    };

    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )?;
    stream.write_all(body)?;
    stream.flush()
}

/// Wire-shaped JSON for a single panorama record. Image links point back at
/// the provided base URL so downloads stay inside the fixture server.
#[allow(dead_code)]
pub(crate) fn panorama_json(
    base_url: &str,
    id: &str,
    filename: &str,
    coordinates: [f64; 2],
) -> serde_json::Value {
    json!({
        "_links": {
            "self": {"href": format!("{base_url}/{id}/")},
            "equirectangular_full": {"href": format!("{base_url}/images/full/{filename}")},
            "equirectangular_medium": {"href": format!("{base_url}/images/medium/{filename}")},
            "equirectangular_small": {"href": format!("{base_url}/images/small/{filename}")},
            "cubic_img_preview": {"href": format!("{base_url}/images/preview/{filename}")},
            "thumbnail": {"href": format!("{base_url}/images/thumbnail/{filename}")},
            "adjacencies": {"href": format!("{base_url}/{id}/adjacencies/")}
        },
        "cubic_img_baseurl": format!("{base_url}/cubic/{id}/"),
        "cubic_img_pattern": "{z}/{f}/{y}/{x}.jpg",
        "geometry": {
            "type": "Point",
            "coordinates": [coordinates[0], coordinates[1], 43.0]
        },
        "pano_id": id,
        "timestamp": "2018-05-02T10:13:31.874132Z",
        "filename": filename,
        "surface_type": "L",
        "mission_distance": 5,
        "mission_type": "bi",
        "mission_year": "2018",
        "roll": -1.31,
        "pitch": 0.54,
        "heading": 231.88,
        "tags": ["mission-2018", "surface-land"]
    })
}

/// Wire-shaped JSON for one collection page.
#[allow(dead_code)]
pub(crate) fn page_json(
    count: u64,
    self_href: &str,
    previous_href: Option<&str>,
    next_href: Option<&str>,
    panoramas: Vec<serde_json::Value>,
) -> serde_json::Value {
    json!({
        "_links": {
            "self": {"href": self_href},
            "previous": {"href": previous_href},
            "next": {"href": next_href}
        },
        "count": count,
        "_embedded": {"panoramas": panoramas}
    })
}

/// A tiny but structurally valid JPEG payload.
#[allow(dead_code)]
pub(crate) fn jpeg_bytes() -> Vec<u8> {
    vec![
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
    ]
}
