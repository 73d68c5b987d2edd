use std::net::SocketAddr;
use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::Config;
use crate::device::DeviceControl;
use crate::firewall::Firewall;
use crate::html;
use crate::http::handler::HandlerError;
use crate::http::parser::{MAX_REQUEST_BYTES, ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::{Route, Router};
use crate::http::writer::ResponseWriter;
use crate::logger::Logger;

/// Shared pieces every connection consults. Built once at startup,
/// read-only afterwards.
pub struct ServerContext {
    pub router: Router,
    pub firewall: Firewall,
    pub basic_auth: Option<String>,
    pub device: Arc<dyn DeviceControl>,
    pub log: Logger,
}

impl ServerContext {
    pub fn from_config(cfg: &Config, device: Arc<dyn DeviceControl>, log: Logger) -> Self {
        Self {
            router: Router::new(),
            firewall: Firewall::new(cfg.allow_from.clone()),
            basic_auth: cfg.basic_auth.clone(),
            device,
            log,
        }
    }
}

pub struct Connection<S> {
    stream: S,
    peer: SocketAddr,
    buffer: BytesMut,
    ctx: Arc<ServerContext>,
    state: ConnectionState,
}

enum ConnectionState {
    Firewall,
    Reading,
    Processing(Request),
    Writing(ResponseWriter, AfterWrite),
    Restart,
    Closed,
}

/// What happens to the connection once the response bytes are out.
enum AfterWrite {
    Close,
    Restart,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, ctx: Arc<ServerContext>) -> Self {
        Self {
            stream,
            peer,
            buffer: BytesMut::with_capacity(1024),
            ctx,
            state: ConnectionState::Firewall,
        }
    }

    /// Serves one request. Never propagates an error to the caller: every
    /// fault is logged or answered, and the stream is shut down on every
    /// exit path.
    pub async fn run(&mut self) {
        loop {
            match &mut self.state {
                ConnectionState::Firewall => {
                    if self.ctx.firewall.is_allowed(self.peer.ip()) {
                        self.state = ConnectionState::Reading;
                    } else {
                        // Denied peers get zero bytes, not a refusal page.
                        self.ctx
                            .log
                            .warn(&format!("IP not allowed: {}", self.peer.ip()));
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Reading => {
                    match self.read_request().await {
                        Ok(req) => {
                            self.ctx
                                .log
                                .debug(&format!("New connection from {}", self.peer));
                            self.ctx.log.debug(&format!("{:?} {}", req.method, req.path));
                            self.state = ConnectionState::Processing(req);
                        }
                        // Quiet path for probes that connect and say nothing.
                        Err(ParseError::EmptyRequest) => {
                            self.state = ConnectionState::Closed;
                        }
                        Err(e) => {
                            self.ctx
                                .log
                                .warn(&format!("Dropping request from {}: {}", self.peer, e));
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let (response, after) = Self::process(&self.ctx, req);
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, after);
                }

                ConnectionState::Writing(writer, after) => {
                    match writer.write_to_stream(&mut self.stream).await {
                        Ok(()) => {
                            let next = match after {
                                AfterWrite::Close => ConnectionState::Closed,
                                AfterWrite::Restart => ConnectionState::Restart,
                            };
                            self.state = next;
                        }
                        Err(e) => {
                            self.ctx
                                .log
                                .warn(&format!("Failed to write response to {}: {}", self.peer, e));
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                // Entered only after the reset response is fully flushed.
                ConnectionState::Restart => {
                    self.ctx.log.info("Reset requested, restarting device");
                    self.ctx.device.restart();
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        if let Err(e) = self.stream.shutdown().await {
            self.ctx.log.debug(&format!("Shutdown of {}: {}", self.peer, e));
        }
    }

    async fn read_request(&mut self) -> Result<Request, ParseError> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, _consumed)) => return Ok(request),

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => return Err(e),
            }

            if self.buffer.len() >= MAX_REQUEST_BYTES {
                return Err(ParseError::TooLarge);
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                return Err(if self.buffer.is_empty() {
                    ParseError::EmptyRequest
                } else {
                    ParseError::Truncated
                });
            }
        }
    }

    /// Auth gate, route lookup, and handler dispatch for one request.
    fn process(ctx: &ServerContext, req: &Request) -> (Response, AfterWrite) {
        if let Some(credential) = ctx.basic_auth.as_deref().filter(|c| !c.is_empty())
            && !req.check_basic_auth(credential)
        {
            ctx.log.warn("Request has invalid auth");
            return (Response::unauthorized("LevIoT"), AfterWrite::Close);
        }

        let Some(route) = ctx.router.resolve(&req.method, &req.path) else {
            return (Response::not_found(), AfterWrite::Close);
        };

        match Self::dispatch(ctx, route, req) {
            Ok(ok) => ok,
            Err(e) => {
                match &e {
                    HandlerError::Validation(msg) => ctx.log.debug(msg),
                    HandlerError::Device(err) => {
                        ctx.log.error(&format!("Device control failed: {}", err))
                    }
                }
                (e.into_response(), AfterWrite::Close)
            }
        }
    }

    fn dispatch(
        ctx: &ServerContext,
        route: Route,
        req: &Request,
    ) -> Result<(Response, AfterWrite), HandlerError> {
        match route {
            Route::Index => Ok((
                Response::html(html::index_page(&ctx.device.state())),
                AfterWrite::Close,
            )),

            Route::SetFan => {
                let speed = Self::int_param(req, "speed")?;
                // The original surfaces device rejection of a fan speed as
                // client error, same as a missing parameter.
                ctx.device
                    .set_fan_speed(speed, "http")
                    .map_err(|e| HandlerError::Validation(e.to_string()))?;
                Ok((Response::see_other("/"), AfterWrite::Close))
            }

            Route::PowerOn | Route::PowerOff => {
                let on = route == Route::PowerOn;
                ctx.device
                    .set_power(on, "http")
                    .map_err(HandlerError::Device)?;
                Ok((Response::see_other("/"), AfterWrite::Close))
            }

            Route::SetTimer => {
                let minutes = Self::int_param(req, "minutes")?;
                ctx.device
                    .set_timer(minutes, "http")
                    .map_err(|e| HandlerError::Validation(e.to_string()))?;
                Ok((Response::see_other("/"), AfterWrite::Close))
            }

            Route::Reset => Ok((Response::ok(), AfterWrite::Restart)),
        }
    }

    fn int_param<T: std::str::FromStr>(req: &Request, name: &str) -> Result<T, HandlerError> {
        let raw = req
            .query_param(name)
            .ok_or_else(|| HandlerError::Validation(format!("missing parameter {}", name)))?;
        raw.parse()
            .map_err(|_| HandlerError::Validation(format!("invalid {}: {}", name, raw)))
    }
}
