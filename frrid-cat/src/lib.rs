use colored::*;
use frrid_frame::*;

struct Writer<'b> {
    buffer: &'b mut String,
    indent: usize,
}

impl<'b> Writer<'b> {
    fn new(buffer: &'b mut String) -> Self {
        Self { buffer, indent: 0 }
    }

    fn increase_indent(&mut self) {
        self.indent += 2;
    }

    fn decrease_indent(&mut self) {
        self.indent -= 2;
    }

    fn write(&mut self, s: String) {
        self.buffer.push_str(&" ".repeat(self.indent));
        self.buffer.push_str(&s);
    }

    fn writeln(&mut self, s: String) {
        self.write(s);
        self.buffer.push('\n');
    }

    fn section(&mut self, title: &str) {
        self.writeln(title.underline().bold().to_string());
    }

    fn field(&mut self, name: &str, value: impl core::fmt::Display) {
        self.writeln(format!("{}: {}", name.bold(), value));
    }
}

/// Pretty printer for captured 802.11 frames carrying French Remote ID
/// elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameParser {
    decoder: RemoteIdDecoder,
    with_fcs: bool,
}

impl FrameParser {
    /// Create a parser looking for the vendor element of `config`.
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            decoder: RemoteIdDecoder::new(config),
            with_fcs: false,
        }
    }

    /// Expect frames to end with their Frame Check Sequence.
    pub fn with_fcs(mut self, with_fcs: bool) -> Self {
        self.with_fcs = with_fcs;
        self
    }

    /// Parse a hex encoded frame.
    pub fn parse_hex(&self, input: &str) -> Result<String> {
        let data = hex::decode(input.trim()).map_err(|_| Error)?;
        self.parse(&data)
    }

    /// Parse a frame.
    pub fn parse(&self, input: &[u8]) -> Result<String> {
        let input = if self.with_fcs {
            let frame = FrameWithFcs::new(input)?;
            &input[..frame.content().len()]
        } else {
            input
        };

        let frame = Frame::new(input)?;
        let header = frame.header();
        let mut buffer = String::new();
        let mut w = Writer::new(&mut buffer);

        // -----------------------------------------------------------------
        // Frame Control
        // -----------------------------------------------------------------
        let fc = header.frame_control();
        w.section("Frame Control");
        w.increase_indent();
        w.field(
            "frame type",
            format!("{:?} {:?}", fc.frame_type(), header.subtype()).bright_blue(),
        );
        if !fc.flags().is_empty() {
            w.field("flags", format!("{:?}", fc.flags()));
        }
        w.decrease_indent();

        // -----------------------------------------------------------------
        // MAC Header
        // -----------------------------------------------------------------
        w.section("MAC Header");
        w.increase_indent();
        w.field("duration", header.duration());
        let receiver = header.receiver();
        w.field(
            "receiver",
            format!(
                "{}{}",
                receiver,
                if receiver.is_broadcast() { " (broadcast)" } else { "" }
            ),
        );
        w.field("transmitter", header.transmitter());
        w.field("bssid", header.bssid());
        w.field("sequence number", header.sequence_number());
        w.field("fragment number", header.fragment_number());
        if let Some(ht_control) = header.ht_control() {
            w.field("ht control", format!("{ht_control:08x}"));
        }
        w.decrease_indent();

        let Some(beacon) = frame.beacon() else {
            w.section("Body");
            w.increase_indent();
            w.writeln(format!("{:x?}", header.body()));
            return Ok(buffer);
        };

        // -----------------------------------------------------------------
        // Fixed Parameters
        // -----------------------------------------------------------------
        w.section("Fixed Parameters");
        w.increase_indent();
        w.field("timestamp", beacon.timestamp());
        w.field("beacon interval", beacon.beacon_interval());
        w.field(
            "capability information",
            format!("{:?}", beacon.capability_information()),
        );
        w.decrease_indent();

        Self::write_elements(&mut w, beacon.elements(), &self.decoder);

        Ok(buffer)
    }

    /// Parse a hex encoded Information Element list, as found after the fixed
    /// parameters of a beacon.
    pub fn parse_elements(&self, input: &str) -> Result<String> {
        let data = hex::decode(input.trim()).map_err(|_| Error)?;
        let mut buffer = String::new();
        let mut w = Writer::new(&mut buffer);

        Self::write_elements(&mut w, &data, &self.decoder);

        Ok(buffer)
    }

    fn write_elements(w: &mut Writer<'_>, elements: &[u8], decoder: &RemoteIdDecoder) {
        // -----------------------------------------------------------------
        // Information Elements
        // -----------------------------------------------------------------
        let mut iter = InformationElementsIterator::new(elements);
        w.section("Information Elements");
        w.increase_indent();
        for ie in &mut iter {
            w.writeln(format!("{ie}"));
        }
        if iter.offset() < elements.len() {
            w.writeln(format!("{}", "truncated".red()));
        }
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Remote ID
        // -----------------------------------------------------------------
        let Some((vendor, result)) = decoder.decode_elements(elements) else {
            return;
        };

        w.section("Remote ID");
        w.increase_indent();
        w.field("sub-type", vendor.sub_type());

        w.writeln(format!("{}", "Records".italic()));
        w.increase_indent();
        let mut records = RemoteIdRecordsIterator::new(vendor.body());
        for record in &mut records {
            w.writeln(format!("{record}"));
        }
        if records.truncated() {
            w.writeln(format!("{}", "truncated".red()));
        }
        w.decrease_indent();

        w.writeln(format!("{}", "Decoded".italic()));
        w.increase_indent();
        w.field("presence", format!("{:?}", result.presence()).bright_blue());
        for line in result.to_string().lines() {
            w.writeln(line.to_string());
        }
        if !result.anomalies().is_empty() {
            w.field("anomalies", format!("{:?}", result.anomalies()).yellow());
        }
        w.decrease_indent();
        w.decrease_indent();
    }
}
