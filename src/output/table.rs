use colored::Colorize;
use comfy_table::{Cell, Color, Table};

use crate::types::PortSet;

pub fn print_ports(pid: i64, ports: &PortSet) {
    if ports.is_empty() {
        println!("{}", format!("No TCP ports found for pid {pid}").yellow());
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["PID", "PORT"]);

    for port in ports.iter() {
        table.add_row(vec![Cell::new(pid), Cell::new(port).fg(Color::Cyan)]);
    }

    println!("{table}");
    println!("\n{} port(s)", ports.len().to_string().green());
}
