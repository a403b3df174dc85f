//! Phase two of the Linux strategy: the kernel's TCP connection
//! tables.

/// A `/proc/net/tcp{,6}` record reduced to what the join needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpRecord {
    pub inode: u64,
    pub local_port: u16,
}

/// Parse a whole table, skipping the header line and malformed rows.
pub fn parse_tcp_table(content: &str) -> Vec<TcpRecord> {
    content.lines().skip(1).filter_map(parse_record).collect()
}

/// Parse one record.
///
/// Rows are whitespace-delimited with at least 10 fields; field 1
/// holds the local `HEXIP:HEXPORT` pair, field 9 the socket inode in
/// decimal.
fn parse_record(line: &str) -> Option<TcpRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 10 {
        return None;
    }

    let (_, port_hex) = fields[1].rsplit_once(':')?;
    let local_port = u16::from_str_radix(port_hex, 16).ok()?;
    let inode = fields[9].parse().ok()?;

    Some(TcpRecord { inode, local_port })
}
