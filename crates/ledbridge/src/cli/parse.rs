//! `parse` subcommand — run the token parser and print the topology.

use ledbridge_lib::parse;

use super::{ParseOutput, Result, kv, kv_indent, kv_width, or_dash, to_json};

pub(super) fn run(tokens: &[String], json: bool) -> Result<()> {
    let parsed = parse::parse_tokens(tokens);
    for w in &parsed.warnings {
        log::warn!("{w}");
    }

    if json {
        let output = ParseOutput {
            options: parsed.options,
            warnings: parsed.warnings,
        };
        println!("{}", to_json(&output)?);
        return Ok(());
    }

    let w = kv_width(
        &["enable_fonts"],
        &[
            "pwm_lsb_nanoseconds",
            "disable_hardware_pulsing",
            "limit_refresh_rate_hz",
        ],
    );
    let m = &parsed.options.matrix;
    let r = &parsed.options.runtime;

    kv("enable_fonts", parsed.options.enable_fonts, w);
    println!("matrix:");
    kv_indent("rows", m.rows, w);
    kv_indent("cols", m.cols, w);
    kv_indent("chain_length", m.chain_length, w);
    kv_indent("parallel", m.parallel, w);
    kv_indent("multiplexing", m.multiplexing, w);
    kv_indent("hardware_mapping", &m.hardware_mapping, w);
    kv_indent("pixel_mapper_chain", or_dash(&m.pixel_mapper_chain), w);
    kv_indent("brightness", m.brightness, w);
    kv_indent("pwm_bits", m.pwm_bits, w);
    kv_indent("pwm_lsb_nanoseconds", m.pwm_lsb_nanoseconds, w);
    kv_indent("pwm_dither_bits", m.pwm_dither_bits, w);
    kv_indent("scan_mode", m.scan_mode, w);
    kv_indent("row_address_type", m.row_address_type, w);
    kv_indent("panel_type", or_dash(&m.panel_type), w);
    kv_indent("rgb_sequence", &m.rgb_sequence, w);
    kv_indent("disable_hardware_pulsing", m.disable_hardware_pulsing, w);
    kv_indent("inverse_colors", m.inverse_colors, w);
    kv_indent("limit_refresh_rate_hz", m.limit_refresh_rate_hz, w);
    kv_indent("show_refresh_rate", m.show_refresh_rate, w);
    println!("runtime:");
    kv_indent("gpio_slowdown", r.gpio_slowdown, w);
    kv_indent("daemon", r.daemon, w);
    kv_indent("drop_privileges", r.drop_privileges, w);
    kv_indent("drop_priv_user", or_dash(&r.drop_priv_user), w);
    kv_indent("drop_priv_group", or_dash(&r.drop_priv_group), w);

    if !parsed.warnings.is_empty() {
        println!();
        println!("warnings: {}", parsed.warnings.len());
    }
    Ok(())
}
