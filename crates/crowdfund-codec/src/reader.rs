use crate::error::{DecodeError, DecodeResult};

/// Bounds-checked little-endian cursor over an account buffer.
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, field: &'static str, n: usize) -> DecodeResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(DecodeError::UnexpectedEnd {
                field,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn array<const N: usize>(&mut self, field: &'static str) -> DecodeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(field, N)?);
        Ok(out)
    }

    pub(crate) fn bytes32(&mut self, field: &'static str) -> DecodeResult<[u8; 32]> {
        self.array(field)
    }

    pub(crate) fn u8(&mut self, field: &'static str) -> DecodeResult<u8> {
        Ok(self.take(field, 1)?[0])
    }

    pub(crate) fn u32(&mut self, field: &'static str) -> DecodeResult<u32> {
        self.array(field).map(u32::from_le_bytes)
    }

    pub(crate) fn u64(&mut self, field: &'static str) -> DecodeResult<u64> {
        self.array(field).map(u64::from_le_bytes)
    }

    pub(crate) fn i64(&mut self, field: &'static str) -> DecodeResult<i64> {
        self.array(field).map(i64::from_le_bytes)
    }

    pub(crate) fn bool(&mut self, field: &'static str) -> DecodeResult<bool> {
        match self.u8(field)? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidBool { field, value }),
        }
    }

    /// Length-prefixed UTF-8 string. The declared length is checked against
    /// the remaining buffer before anything is sliced.
    pub(crate) fn string(&mut self, field: &'static str) -> DecodeResult<String> {
        let declared = self.u32(field)? as usize;
        if declared > self.remaining() {
            return Err(DecodeError::LengthOverflow {
                field,
                declared,
                remaining: self.remaining(),
            });
        }
        let bytes = self.take(field, declared)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    pub(crate) fn finish(self) -> DecodeResult<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(DecodeError::TrailingBytes(n)),
        }
    }
}

/// Append a u32-length-prefixed string.
pub(crate) fn put_string(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}
