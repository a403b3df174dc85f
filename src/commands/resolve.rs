use anyhow::Result;

use crate::output::{json, table};
use crate::resolver;

pub fn execute(pid: i64, output_json: bool) -> Result<()> {
    let ports = resolver::resolve(pid)?;

    if output_json {
        json::print_ports(&ports);
    } else {
        table::print_ports(pid, &ports);
    }

    Ok(())
}
