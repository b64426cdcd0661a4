//! This runs a city in the background and serves its picture over HTTP, so other programs can
//! look at the result without writing files.
//!
//! > cargo run --bin headless -- --port=2003
//! > curl http://localhost:2003/svg

#[macro_use]
extern crate log;

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use structopt::StructOpt;

use cartographer::SvgOptions;
use city_model::{City, CityConfig};

#[derive(StructOpt)]
#[structopt(name = "headless", about = "Serves a rendered city over HTTP")]
struct Args {
    /// The port to run the server on
    #[structopt(long, default_value = "2003")]
    port: u16,
    /// A JSON city config to build. If unset, the built-in Alpha city is used.
    #[structopt(long)]
    input: Option<String>,
    /// Distance between grid lines, in world units. 0 disables the grid.
    #[structopt(long, default_value = "10")]
    grid_spacing: i32,
}

/// The city is finalized before the server starts and never changes afterwards, so requests
/// can share it without locking.
struct State {
    city: City,
    opts: SvgOptions,
}

#[tokio::main]
async fn main() -> Result<()> {
    abstutil::logger::setup();
    let args = Args::from_args();

    let config = match args.input {
        Some(ref path) => CityConfig::load(path)?,
        None => CityConfig::alpha(),
    };
    let state = Arc::new(State {
        city: config.build_finalized()?,
        opts: SvgOptions {
            grid_spacing: args.grid_spacing,
        },
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    info!("Serving {} on http://{}/svg", state.city.name(), addr);

    let make_svc = make_service_fn(move |_conn| {
        let state = state.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                let state = state.clone();
                async move { Ok::<_, Infallible>(handle(&state, &req)) }
            }))
        }
    });
    Server::try_bind(&addr)?.serve(make_svc).await?;
    Ok(())
}

fn handle(state: &State, req: &Request<Body>) -> Response<Body> {
    info!("Handling {} {}", req.method(), req.uri());
    if req.method() != Method::GET {
        return respond(
            StatusCode::METHOD_NOT_ALLOWED,
            "text/plain",
            format!("{} isn't supported", req.method()),
        );
    }

    match req.uri().path() {
        "/svg" => match cartographer::render_svg(&state.city, &state.opts) {
            Ok(svg) => respond(StatusCode::OK, "image/svg+xml", svg),
            Err(err) => {
                error!("Couldn't draw {}: {}", state.city.name(), err);
                respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "text/plain",
                    err.to_string(),
                )
            }
        },
        "/summary" => respond(StatusCode::OK, "text/plain", state.city.summary()),
        path => respond(
            StatusCode::NOT_FOUND,
            "text/plain",
            format!("Unknown path {}", path),
        ),
    }
}

fn respond(status: StatusCode, content_type: &'static str, body: String) -> Response<Body> {
    let mut resp = Response::new(Body::from(body));
    *resp.status_mut() = status;
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    resp
}
