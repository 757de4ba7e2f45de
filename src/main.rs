#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::time::Duration;

use itertools::Itertools;
use structopt::StructOpt;
use tracing::error;

use restriction_tool::feed::{self, Fetch, FileFetcher, HttpFetcher};
use restriction_tool::logger;
use restriction_tool::{Restriction, Shape};

#[derive(StructOpt)]
#[structopt(name = "restriction_tool")]
struct Args {
    /// Bulletin to fetch
    #[structopt(short = "u", long = "url", raw(default_value = "feed::DEFAULT_PIB_URL"))]
    url: String,
    /// Read a saved bulletin instead of fetching one
    #[structopt(short = "i", long = "input", parse(from_os_str))]
    input: Option<PathBuf>,
    /// Fetch timeout in seconds
    #[structopt(short = "t", long = "timeout", default_value = "30")]
    timeout: u64,
    /// List every polygon vertex
    #[structopt(short = "p", long = "points")]
    points: bool,
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

fn shape_summary(r: &Restriction, points: bool) -> String {
    match r.shape {
        Some(Shape::Circle { center, radius_nm }) => {
            format!("Circle: {} radius {}nm", center.to_dms(), radius_nm)
        }
        Some(Shape::Polygon(ref vertices)) if points => format!(
            "Polygon: {} vertices\n  {}",
            vertices.len(),
            vertices.iter().map(|v| v.to_dms()).join("\n  ")
        ),
        Some(Shape::Polygon(ref vertices)) => format!("Polygon: {} vertices", vertices.len()),
        None => "No shape".to_owned(),
    }
}

fn main() {
    let args = Args::from_args();
    logger::init_cli_logger(args.verbose);

    let fetcher: Box<dyn Fetch> = match args.input {
        Some(path) => Box::new(FileFetcher(path)),
        None => match HttpFetcher::new(args.url, Duration::from_secs(args.timeout)) {
            Ok(fetcher) => Box::new(fetcher),
            Err(e) => {
                error!(error = %e, "could not build HTTP client");
                Box::new(|| -> restriction_tool::Result<String> { Ok(String::new()) })
            }
        },
    };

    let restrictions = feed::ingest(&*fetcher);
    println!("Found {} restrictions:", restrictions.len());
    for r in restrictions {
        println!("\n{} - {}", r.kind, r.id);
        println!("{}", shape_summary(&r, args.points));
        println!("Valid: {} to {}", r.valid_from, r.valid_to);
        println!("Altitude: {} to {}", r.lower, r.upper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restriction_tool::{LatLon, RestrictionKind};

    fn restriction(shape: Option<Shape>) -> Restriction {
        Restriction {
            id: "H1234/24".to_owned(),
            kind: RestrictionKind::DangerArea,
            valid_from: "2410010800".to_owned(),
            valid_to: "2410011600".to_owned(),
            lower: "SFC".to_owned(),
            upper: "FL100".to_owned(),
            description: "SEE CHART".to_owned(),
            shape,
        }
    }

    fn point(token: &str) -> LatLon {
        LatLon::from_notam(token).unwrap()
    }

    #[test]
    fn circle_summary() {
        let r = restriction(Some(Shape::Circle {
            center: point("5152N00049E"),
            radius_nm: 2.5,
        }));
        assert_eq!(
            shape_summary(&r, false),
            "Circle: N051.52.00.000 E000.49.00.000 radius 2.5nm"
        );
    }

    #[test]
    fn polygon_summary() {
        let r = restriction(Some(Shape::Polygon(vec![
            point("5152N00049E"),
            point("5200N00100W"),
        ])));
        assert_eq!(shape_summary(&r, false), "Polygon: 2 vertices");
        assert_eq!(
            shape_summary(&r, true),
            "Polygon: 2 vertices\n  N051.52.00.000 E000.49.00.000\n  N052.00.00.000 W001.00.00.000"
        );
    }

    #[test]
    fn missing_shape_summary() {
        assert_eq!(shape_summary(&restriction(None), true), "No shape");
    }
}
