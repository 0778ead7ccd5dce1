//! `geometry` subcommand — print the derived screen geometry.

use ledbridge_lib::geometry::ScreenGeometry;
use ledbridge_lib::parse;

use super::{GeometryOutput, Result, kv, kv_width, to_json};

pub(super) fn run(tokens: &[String], json: bool) -> Result<()> {
    let options = parse::parse_tokens_logged(tokens);
    let geometry = ScreenGeometry::from_options(&options.matrix);

    if json {
        let output = GeometryOutput {
            width: geometry.width,
            height: geometry.height,
            depth: geometry.depth(),
            format: geometry.format(),
        };
        println!("{}", to_json(&output)?);
        return Ok(());
    }

    let w = kv_width(&["width", "height", "depth", "format"], &[]);
    kv("width", geometry.width, w);
    kv("height", geometry.height, w);
    kv("depth", geometry.depth(), w);
    kv("format", geometry.format(), w);
    Ok(())
}
