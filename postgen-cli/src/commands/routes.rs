//! Implementation of the `postgen routes` command.

use std::path::Path;

use colored::Colorize;
use postgen::collection;
use postgen::introspection::RouteInfo;

use crate::colors;

/// Execute the `routes` command.
pub fn execute(path: &Path) -> Result<(), String> {
    let registry = super::load_route_table(path)?;
    let routes = collection::enumerate(&registry);

    println!();
    println!(
        "  {:<8} {:<40} {}",
        "METHOD".bold(),
        "PATH".bold(),
        "HANDLER".bold()
    );

    for route in &routes.routes {
        println!("{}", route_row(&RouteInfo::from(route)));
    }

    for handler in &routes.skipped {
        println!(
            "  {} {} has no patterns and will be skipped",
            "!".custom_color(colors::yellow()).bold(),
            handler.name.custom_color(colors::yellow())
        );
    }

    println!();
    println!(
        "  {} routes from {} mappings",
        routes.routes.len().to_string().bold(),
        registry.len()
    );
    println!();

    Ok(())
}

/// One listing row: method and path padded into columns, then the handler.
fn route_row(info: &RouteInfo) -> String {
    format!(
        "  {} {:<40} {}",
        format!("{:<8}", info.method).custom_color(colors::method(&info.method)),
        info.path,
        info.handler_name.custom_color(colors::subtext())
    )
}
