// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::borrow::Cow;

use crate::error::ShellResult;

/// Bytes reserved up front, and added each time the buffer fills up.
pub const LINE_BUFFER_INCREMENT: usize = 1024;

/// Editable bytes of the line being typed. The cursor always sits at the end.
#[derive(Debug)]
pub struct LineBuffer {
    bytes: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> ShellResult<Self> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(LINE_BUFFER_INCREMENT)?;
        Ok(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn push(&mut self, byte: u8) -> ShellResult<()> {
        self.grow_for(1)?;
        self.bytes.push(byte);
        Ok(())
    }

    /// Drop the last character, treating a trailing UTF-8 sequence as one character.
    pub fn pop_char(&mut self) -> bool {
        let Some(mut byte) = self.bytes.pop() else {
            return false;
        };
        // continuation bytes are 0b10xx_xxxx
        while byte & 0xC0 == 0x80 {
            match self.bytes.pop() {
                Some(prev) => byte = prev,
                None => break,
            }
        }
        true
    }

    /// Replace the whole contents.
    pub fn set(&mut self, text: &str) -> ShellResult<()> {
        self.bytes.clear();
        self.grow_for(text.len())?;
        self.bytes.extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn grow_for(&mut self, additional: usize) -> ShellResult<()> {
        let needed = self.bytes.len() + additional;
        if needed > self.bytes.capacity() {
            let shortfall = needed - self.bytes.capacity();
            let increments = shortfall.div_ceil(LINE_BUFFER_INCREMENT);
            let target = self.bytes.capacity() + increments * LINE_BUFFER_INCREMENT;
            self.bytes.try_reserve_exact(target - self.bytes.len())?;
        }
        Ok(())
    }
}
