//! Generated-style request/response pair used by the channel tests.

use ferrule_wire::{
    InputStream, Message, OutputStream, UnknownFieldSet, WireError, WireReader, WireWriter, field,
};

/// Request: `sensor_id = 1` (uint32).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingRequest {
    pub sensor_id: u32,
    pub unknown_fields: UnknownFieldSet,
}

impl Message for ReadingRequest {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.sensor_id != 0 {
            field::write_uint32(&mut w, 1, self.sensor_id)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.sensor_id = field::read_uint32(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.sensor_id != 0 {
            size += field::uint32_size(1, self.sensor_id);
        }
        size + self.unknown_fields.byte_size()
    }
}

/// Response: `sensor_id = 1` (uint32), `temperature = 2` (float).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingResponse {
    pub sensor_id: u32,
    pub temperature: f32,
    pub unknown_fields: UnknownFieldSet,
}

impl Message for ReadingResponse {
    fn encode<S: OutputStream + ?Sized>(&self, stream: &mut S) -> Result<(), WireError> {
        let mut w = WireWriter::new(stream);
        if self.sensor_id != 0 {
            field::write_uint32(&mut w, 1, self.sensor_id)?;
        }
        if self.temperature != 0.0 {
            field::write_float(&mut w, 2, self.temperature)?;
        }
        self.unknown_fields.serialize_to(w.stream())
    }

    fn merge<S: InputStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), WireError> {
        let mut r = WireReader::new(stream);
        while let Some(tag) = r.read_tag()? {
            match tag.field_number {
                1 => self.sensor_id = field::read_uint32(&mut r, tag.wire_type)?,
                2 => self.temperature = field::read_float(&mut r, tag.wire_type)?,
                _ => r.skip_and_save(tag.field_number, tag.wire_type, &mut self.unknown_fields)?,
            }
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.sensor_id != 0 {
            size += field::uint32_size(1, self.sensor_id);
        }
        if self.temperature != 0.0 {
            size += field::float_size(2);
        }
        size + self.unknown_fields.byte_size()
    }
}
