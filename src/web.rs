//! # HTTP Endpoint
//!
//! A single-route server for the web front end:
//!
//! ```text
//! GET /scale?root=A&type=minor&tuning=E+A+D+G+B+E&frets=12&chord=Amin7
//! ```
//!
//! Every parameter is optional (defaults: `A`, `minor`, standard tuning, 12 frets, no
//! chord). The response is JSON with the PNG diagram as base64 and the scale summary:
//!
//! ```json
//! { "picture": "iVBORw0...", "scale": { "name": "A minor", "notes": ["A", ...], "chords": ["Amin7", ...] } }
//! ```
//!
//! Invalid input is answered with `400` and `{ "error": "..." }`, rendering failures
//! with `500`.

use crate::api::{new_scale, summarize, ScaleSummary};
use crate::error::ScaleMateError;
use crate::fretboard::{Fretboard, FretboardOptions, STANDARD_TUNING};
use crate::render::{RenderOptions, Renderer};
use crate::{Chord, Scale};
use base64::Engine;
use log::{error, info, warn};
use serde::Serialize;
use std::io;
use tiny_http::{Header, Method, Response, Server};

/// Fret count when the query has none; differs from the library default of 22
const WEB_DEFAULT_FRETS: u32 = 12;

/// Query parameters of `GET /scale`
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRequest {
    pub root: String,
    pub scale_type: String,
    pub tuning: String,
    pub frets: u32,
    pub chord: Option<String>,
}

impl Default for ScaleRequest {
    fn default() -> Self {
        Self {
            root: "A".to_string(),
            scale_type: "minor".to_string(),
            tuning: STANDARD_TUNING.to_string(),
            frets: WEB_DEFAULT_FRETS,
            chord: None,
        }
    }
}

impl ScaleRequest {
    /// Parse a URL query string; empty values and non-positive fret counts keep the defaults.
    ///
    /// Fret counts above [`crate::MAX_FRETS`] are kept and rejected by [`Self::fretboard`].
    pub fn from_query(query: &str) -> Self {
        let mut request = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match &*key {
                "root" => request.root = value.into_owned(),
                "type" => request.scale_type = value.into_owned(),
                "tuning" => request.tuning = value.into_owned(),
                "frets" => {
                    if let Ok(frets) = value.parse::<u32>() {
                        if frets > 0 {
                            request.frets = frets;
                        }
                    }
                }
                "chord" => request.chord = Some(value.into_owned()),
                _ => {}
            }
        }
        request
    }

    pub fn scale(&self) -> Result<Scale, ScaleMateError> {
        new_scale(&self.root, &self.scale_type)
    }

    /// Fretboard with the requested scale and chord highlighted
    pub fn fretboard(&self) -> Result<Fretboard, ScaleMateError> {
        let mut fretboard = Fretboard::new(FretboardOptions {
            tuning: Some(self.tuning.clone()),
            frets: Some(self.frets),
        })?;
        fretboard.highlight_scale(self.scale()?);
        if let Some(chord) = &self.chord {
            fretboard.highlight_chord(Chord::parse(chord)?);
        }
        Ok(fretboard)
    }
}

#[derive(Debug, Serialize)]
pub struct ScaleResponse {
    /// Base64-encoded PNG
    pub picture: String,
    pub scale: ScaleSummary,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Status code and JSON body of a response
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body },
            Err(e) => Self::error(500, &e.to_string()),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self { status, body }
    }

    fn from_error(e: &ScaleMateError) -> Self {
        if e.is_client_error() {
            Self::json(400, &ErrorResponse { error: e.to_string() })
        } else {
            error!("internal error: {}", e);
            Self::error(500, "Internal Server Error")
        }
    }
}

/// Layout used for the web front end: no title, neck flush with the left edge
pub fn web_options(base: &RenderOptions) -> RenderOptions {
    RenderOptions {
        margin_x: 0.0,
        margin_y: 40.0,
        draw_title: false,
        ..base.clone()
    }
}

/// Route one request
pub fn handle(method: &Method, url: &str, options: &RenderOptions) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    if path != "/scale" {
        return Reply::error(404, "Not Found");
    }
    if *method != Method::Get {
        return Reply::error(405, "Method Not Allowed");
    }

    match scale_response(&ScaleRequest::from_query(query), options) {
        Ok(response) => Reply::json(200, &response),
        Err(e) => Reply::from_error(&e),
    }
}

fn scale_response(
    request: &ScaleRequest,
    options: &RenderOptions,
) -> Result<ScaleResponse, ScaleMateError> {
    let fretboard = request.fretboard()?;
    let scale = summarize(&request.scale()?)?;
    let png = Renderer::new(&fretboard, options.clone()).render_png()?;
    Ok(ScaleResponse {
        picture: base64::engine::general_purpose::STANDARD.encode(png),
        scale,
    })
}

/// Serve requests on `addr` until the process is stopped
pub fn serve(addr: &str, options: &RenderOptions) -> Result<(), ScaleMateError> {
    let server = Server::http(addr).map_err(|e| ScaleMateError::Io(io::Error::other(e)))?;
    let options = web_options(options);
    info!("starting application at {}", addr);

    for request in server.incoming_requests() {
        let reply = handle(request.method(), request.url(), &options);
        info!("{} {} {}", request.method(), request.url(), reply.status);

        let mut response = Response::from_string(reply.body).with_status_code(reply.status);
        if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
            response = response.with_header(header);
        }
        if let Err(e) = request.respond(response) {
            warn!("failed to send response: {}", e);
        }
    }

    Ok(())
}
