use crate::types::PortSet;

pub fn print_ports(ports: &PortSet) {
    let json = serde_json::to_string_pretty(ports).expect("Failed to serialize to JSON");
    println!("{json}");
}
