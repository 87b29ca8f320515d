//! Low-level wire-format reader.
//!
//! [`WireReader`] parses the primitive encodings off any [`InputStream`],
//! and carries the unknown-field machinery: fields the caller does not
//! recognize can be skipped, captured as raw bytes, or stored straight
//! into an [`UnknownFieldSet`].

use crate::error::WireError;
use crate::stream::InputStream;
use crate::text::ProtoString;
use crate::types::{FieldTag, WireType, zigzag_decode32, zigzag_decode64};
use crate::unknown::UnknownFieldSet;
use crate::writer::{MAX_VARINT_LEN, encode_varint};

/// Wire-format reader over an input stream.
pub struct WireReader<'a, S: InputStream + ?Sized> {
    stream: &'a mut S,
}

impl<'a, S: InputStream + ?Sized> WireReader<'a, S> {
    pub fn new(stream: &'a mut S) -> Self {
        WireReader { stream }
    }

    /// The underlying stream, for callers that need to hand a sub-range to
    /// a nested decoder.
    pub fn stream(&mut self) -> &mut S {
        self.stream
    }

    pub fn position(&self) -> usize {
        self.stream.position()
    }

    pub fn available(&self) -> usize {
        self.stream.available()
    }

    fn read_byte(&mut self) -> Result<u8, WireError> {
        let mut buf = [0u8; 1];
        self.stream.read(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a base-128 varint of at most ten bytes.
    ///
    /// A tenth byte above `0x01` would carry bits past the 64th and is
    /// rejected as overflow, as is a continuation bit on the tenth byte.
    pub fn read_varint(&mut self) -> Result<u64, WireError> {
        let mut value: u64 = 0;
        let mut shift = 0u32;
        for i in 0..MAX_VARINT_LEN {
            let byte = self.read_byte()?;
            if i == MAX_VARINT_LEN - 1 && byte > 1 {
                return Err(WireError::VarintOverflow);
            }
            value |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
        Err(WireError::VarintOverflow)
    }

    /// Read four bytes, little-endian.
    pub fn read_fixed32(&mut self) -> Result<u32, WireError> {
        let mut buf = [0u8; 4];
        self.stream.read(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Read eight bytes, little-endian.
    pub fn read_fixed64(&mut self) -> Result<u64, WireError> {
        let mut buf = [0u8; 8];
        self.stream.read(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    pub fn read_sfixed32(&mut self) -> Result<i32, WireError> {
        Ok(self.read_fixed32()? as i32)
    }

    pub fn read_sfixed64(&mut self) -> Result<i64, WireError> {
        Ok(self.read_fixed64()? as i64)
    }

    /// Read an IEEE-754 single, bit-cast, little-endian.
    pub fn read_float(&mut self) -> Result<f32, WireError> {
        Ok(f32::from_bits(self.read_fixed32()?))
    }

    /// Read an IEEE-754 double, bit-cast, little-endian.
    pub fn read_double(&mut self) -> Result<f64, WireError> {
        Ok(f64::from_bits(self.read_fixed64()?))
    }

    /// Read a varint length prefix, validated against the remaining input,
    /// without consuming the body.
    pub fn read_length(&mut self) -> Result<usize, WireError> {
        let len = self.read_varint()?;
        if len > self.stream.available() as u64 {
            return Err(WireError::Truncated);
        }
        Ok(len as usize)
    }

    /// Read a length-delimited byte field.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>, WireError> {
        let len = self.read_length()?;
        let mut data = vec![0u8; len];
        self.stream.read(&mut data)?;
        Ok(data)
    }

    /// Read a length-delimited string field.
    ///
    /// Content is not validated as UTF-8; malformed text is accepted and
    /// round-trips byte-for-byte.
    pub fn read_string(&mut self) -> Result<ProtoString, WireError> {
        Ok(ProtoString::from_bytes(self.read_bytes()?))
    }

    /// Read the next field tag, or `None` at a clean end of input.
    pub fn read_tag(&mut self) -> Result<Option<FieldTag>, WireError> {
        if self.stream.available() == 0 {
            return Ok(None);
        }
        let raw = self.read_varint()?;
        FieldTag::from_wire(raw).map(Some)
    }

    /// Zigzag-decode a signed 32-bit value.
    pub fn read_sint32(&mut self) -> Result<i32, WireError> {
        Ok(zigzag_decode32(self.read_varint()? as u32))
    }

    /// Zigzag-decode a signed 64-bit value.
    pub fn read_sint64(&mut self) -> Result<i64, WireError> {
        Ok(zigzag_decode64(self.read_varint()?))
    }

    /// Advance past the body of a field without keeping it.
    ///
    /// Groups are consumed through their matching `END_GROUP` tag. A
    /// standalone `END_GROUP` is malformed.
    pub fn skip_field(&mut self, wire_type: WireType) -> Result<(), WireError> {
        match wire_type {
            WireType::Varint => {
                self.read_varint()?;
                Ok(())
            }
            WireType::Fixed64 => self.stream.skip(8),
            WireType::LengthDelimited => {
                let len = self.read_length()?;
                self.stream.skip(len)
            }
            WireType::StartGroup => {
                self.capture_unknown_field(WireType::StartGroup)?;
                Ok(())
            }
            WireType::EndGroup => Err(WireError::UnexpectedEndGroup),
            WireType::Fixed32 => self.stream.skip(4),
        }
    }

    /// Consume a field body and return it exactly as an
    /// [`UnknownFieldSet`] stores it: value bytes for varint and fixed
    /// fields, prefix-plus-body for length-delimited fields, and the
    /// interior (tags excluded) for groups.
    pub fn capture_unknown_field(&mut self, wire_type: WireType) -> Result<Vec<u8>, WireError> {
        match wire_type {
            WireType::Varint => {
                let value = self.read_varint()?;
                let mut buf = [0u8; MAX_VARINT_LEN];
                let len = encode_varint(value, &mut buf);
                Ok(buf[..len].to_vec())
            }
            WireType::Fixed32 => {
                let mut data = vec![0u8; 4];
                self.stream.read(&mut data)?;
                Ok(data)
            }
            WireType::Fixed64 => {
                let mut data = vec![0u8; 8];
                self.stream.read(&mut data)?;
                Ok(data)
            }
            WireType::LengthDelimited => {
                let len = self.read_length()?;
                let mut buf = [0u8; MAX_VARINT_LEN];
                let prefix = encode_varint(len as u64, &mut buf);
                let mut data = vec![0u8; prefix + len];
                data[..prefix].copy_from_slice(&buf[..prefix]);
                self.stream.read(&mut data[prefix..])?;
                Ok(data)
            }
            WireType::StartGroup => {
                let mut interior = Vec::new();
                loop {
                    let tag = match self.read_tag()? {
                        Some(tag) => tag,
                        None => return Err(WireError::UnterminatedGroup),
                    };
                    if tag.wire_type == WireType::EndGroup {
                        return Ok(interior);
                    }
                    let mut buf = [0u8; MAX_VARINT_LEN];
                    let tag_len = encode_varint(u64::from(tag.as_wire()), &mut buf);
                    interior.extend_from_slice(&buf[..tag_len]);
                    let body = self.capture_unknown_field(tag.wire_type)?;
                    interior.extend_from_slice(&body);
                    if tag.wire_type == WireType::StartGroup {
                        // Nested group: restore the closing tag the capture
                        // consumed.
                        let end = FieldTag::new(tag.field_number, WireType::EndGroup);
                        let end_len = encode_varint(u64::from(end.as_wire()), &mut buf);
                        interior.extend_from_slice(&buf[..end_len]);
                    }
                }
            }
            WireType::EndGroup => Err(WireError::UnexpectedEndGroup),
        }
    }

    /// Consume a field and store it into `unknowns` under `field_number`.
    pub fn skip_and_save(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        unknowns: &mut UnknownFieldSet,
    ) -> Result<(), WireError> {
        match wire_type {
            WireType::Varint => {
                let value = self.read_varint()?;
                unknowns.add_varint(field_number, value);
                Ok(())
            }
            WireType::Fixed32 => {
                let value = self.read_fixed32()?;
                unknowns.add_fixed32(field_number, value);
                Ok(())
            }
            WireType::Fixed64 => {
                let value = self.read_fixed64()?;
                unknowns.add_fixed64(field_number, value);
                Ok(())
            }
            WireType::LengthDelimited => {
                let body = self.read_bytes()?;
                unknowns.add_length_delimited(field_number, &body);
                Ok(())
            }
            WireType::StartGroup => {
                let interior = self.capture_unknown_field(WireType::StartGroup)?;
                unknowns.add_group(field_number, &interior);
                Ok(())
            }
            WireType::EndGroup => Err(WireError::UnexpectedEndGroup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{SliceInputStream, VecOutputStream};
    use crate::writer::WireWriter;

    fn reader_over(data: &[u8]) -> SliceInputStream<'_> {
        SliceInputStream::new(data)
    }

    #[test]
    fn varint_roundtrip_values() {
        for value in [0u64, 1, 127, 128, 300, 16_383, u32::MAX as u64, u64::MAX] {
            let mut out = VecOutputStream::new();
            WireWriter::new(&mut out).write_varint(value).unwrap();
            let bytes = out.into_inner();
            let mut input = reader_over(&bytes);
            let got = WireReader::new(&mut input).read_varint().unwrap();
            assert_eq!(got, value);
        }
    }

    #[test]
    fn varint_accepts_max_ten_byte_encoding() {
        // u64::MAX: nine 0xFF continuation bytes then 0x01.
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        let mut input = reader_over(&bytes);
        assert_eq!(WireReader::new(&mut input).read_varint().unwrap(), u64::MAX);
    }

    #[test]
    fn varint_rejects_overflow_tenth_byte() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x02];
        let mut input = reader_over(&bytes);
        assert_eq!(
            WireReader::new(&mut input).read_varint(),
            Err(WireError::VarintOverflow)
        );
    }

    #[test]
    fn varint_rejects_eleven_bytes() {
        let bytes = [0x80u8; 11];
        let mut input = reader_over(&bytes);
        assert_eq!(
            WireReader::new(&mut input).read_varint(),
            Err(WireError::VarintOverflow)
        );
    }

    #[test]
    fn varint_truncated() {
        let bytes = [0x80, 0x80];
        let mut input = reader_over(&bytes);
        assert_eq!(
            WireReader::new(&mut input).read_varint(),
            Err(WireError::Truncated)
        );
    }

    #[test]
    fn fixed_reads() {
        let bytes = [0xEF, 0xBE, 0xAD, 0xDE];
        let mut input = reader_over(&bytes);
        assert_eq!(WireReader::new(&mut input).read_fixed32().unwrap(), 0xDEADBEEF);

        let short = [0x01, 0x02, 0x03];
        let mut input = reader_over(&short);
        assert_eq!(
            WireReader::new(&mut input).read_fixed32(),
            Err(WireError::Truncated)
        );
    }

    #[test]
    fn float_bit_casts() {
        let bytes = 3.5f32.to_bits().to_le_bytes();
        let mut input = reader_over(&bytes);
        assert_eq!(WireReader::new(&mut input).read_float().unwrap(), 3.5);
    }

    #[test]
    fn bytes_length_exceeding_input_is_truncated() {
        // Claims 100 bytes but carries 2.
        let bytes = [100, 0xAA, 0xBB];
        let mut input = reader_over(&bytes);
        assert_eq!(
            WireReader::new(&mut input).read_bytes(),
            Err(WireError::Truncated)
        );
    }

    #[test]
    fn string_content_is_not_validated() {
        let bytes = [3, b'a', b'b', b'c'];
        let mut input = reader_over(&bytes);
        assert_eq!(WireReader::new(&mut input).read_string().unwrap(), "abc");

        // Malformed text is kept verbatim rather than rejected.
        let bad = [2, 0xFF, 0xFE];
        let mut input = reader_over(&bad);
        let s = WireReader::new(&mut input).read_string().unwrap();
        assert_eq!(s.as_bytes(), &[0xFF, 0xFE]);
        assert_eq!(s.as_str(), None);
    }

    #[test]
    fn tag_stream_to_eof() {
        let bytes = [0x08, 0x05, 0x10, 0x07];
        let mut input = reader_over(&bytes);
        let mut reader = WireReader::new(&mut input);
        let tag = reader.read_tag().unwrap().unwrap();
        assert_eq!((tag.field_number, tag.wire_type), (1, WireType::Varint));
        assert_eq!(reader.read_varint().unwrap(), 5);
        let tag = reader.read_tag().unwrap().unwrap();
        assert_eq!((tag.field_number, tag.wire_type), (2, WireType::Varint));
        assert_eq!(reader.read_varint().unwrap(), 7);
        assert_eq!(reader.read_tag().unwrap(), None);
    }

    #[test]
    fn skip_all_wire_types() {
        let mut out = VecOutputStream::new();
        {
            let mut w = WireWriter::new(&mut out);
            w.write_varint(300).unwrap();
            w.write_fixed64(7).unwrap();
            w.write_bytes(b"xyz").unwrap();
            w.write_fixed32(9).unwrap();
            w.write_varint(42).unwrap();
        }
        let bytes = out.into_inner();
        let mut input = reader_over(&bytes);
        let mut reader = WireReader::new(&mut input);
        reader.skip_field(WireType::Varint).unwrap();
        reader.skip_field(WireType::Fixed64).unwrap();
        reader.skip_field(WireType::LengthDelimited).unwrap();
        reader.skip_field(WireType::Fixed32).unwrap();
        assert_eq!(reader.read_varint().unwrap(), 42);
    }

    #[test]
    fn skip_standalone_end_group_is_malformed() {
        let mut input = reader_over(&[]);
        assert_eq!(
            WireReader::new(&mut input).skip_field(WireType::EndGroup),
            Err(WireError::UnexpectedEndGroup)
        );
    }

    #[test]
    fn capture_varint_reencodes_canonically() {
        // 5 encoded wastefully as 0x85 0x00.
        let bytes = [0x85, 0x00];
        let mut input = reader_over(&bytes);
        let data = WireReader::new(&mut input)
            .capture_unknown_field(WireType::Varint)
            .unwrap();
        assert_eq!(data, vec![0x05]);
    }

    #[test]
    fn capture_length_delimited_keeps_prefix() {
        let bytes = [0x03, b'a', b'b', b'c'];
        let mut input = reader_over(&bytes);
        let data = WireReader::new(&mut input)
            .capture_unknown_field(WireType::LengthDelimited)
            .unwrap();
        assert_eq!(data, vec![0x03, b'a', b'b', b'c']);
    }

    #[test]
    fn capture_group_interior() {
        // Group interior: field 1 varint 5, field 2 string "hi"; then END_GROUP
        // for field 3 (tag 0x1C).
        let bytes = [0x08, 0x05, 0x12, 0x02, b'h', b'i', 0x1C];
        let mut input = reader_over(&bytes);
        let data = WireReader::new(&mut input)
            .capture_unknown_field(WireType::StartGroup)
            .unwrap();
        assert_eq!(data, vec![0x08, 0x05, 0x12, 0x02, b'h', b'i']);
    }

    #[test]
    fn capture_nested_group_restores_inner_end_tag() {
        // Outer interior: nested group field 1 (start 0x0B, varint field 2
        // value 9, end 0x0C), then END_GROUP for the outer group (field 3,
        // 0x1C).
        let bytes = [0x0B, 0x10, 0x09, 0x0C, 0x1C];
        let mut input = reader_over(&bytes);
        let data = WireReader::new(&mut input)
            .capture_unknown_field(WireType::StartGroup)
            .unwrap();
        assert_eq!(data, vec![0x0B, 0x10, 0x09, 0x0C]);
    }

    #[test]
    fn capture_unterminated_group() {
        let bytes = [0x08, 0x05];
        let mut input = reader_over(&bytes);
        assert_eq!(
            WireReader::new(&mut input).capture_unknown_field(WireType::StartGroup),
            Err(WireError::UnterminatedGroup)
        );
    }

    #[test]
    fn skip_and_save_routes_by_wire_type() {
        let mut out = VecOutputStream::new();
        {
            let mut w = WireWriter::new(&mut out);
            w.write_varint(300).unwrap();
            w.write_fixed32(1).unwrap();
            w.write_fixed64(2).unwrap();
            w.write_bytes(b"zz").unwrap();
        }
        let bytes = out.into_inner();
        let mut input = reader_over(&bytes);
        let mut reader = WireReader::new(&mut input);
        let mut unknowns = UnknownFieldSet::new();
        reader.skip_and_save(10, WireType::Varint, &mut unknowns).unwrap();
        reader.skip_and_save(11, WireType::Fixed32, &mut unknowns).unwrap();
        reader.skip_and_save(12, WireType::Fixed64, &mut unknowns).unwrap();
        reader
            .skip_and_save(13, WireType::LengthDelimited, &mut unknowns)
            .unwrap();
        assert_eq!(unknowns.len(), 4);

        // Replaying the set reproduces tag + body for each field.
        let mut replay = VecOutputStream::new();
        unknowns.serialize_to(&mut replay).unwrap();
        assert_eq!(unknowns.byte_size(), replay.len());
    }
}
