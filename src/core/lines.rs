use std::io::{
  self,
  BufRead,
};

/// One item produced by [`LineReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine
{
  /// A line that fit the limit, `\n` included when the input had one.
  Complete(Vec<u8>),
  /// A line longer than the limit. Its bytes were consumed and dropped.
  Overlong,
}

/// Reader limit for a C-style line buffer of `size` bytes (one byte is
/// reserved for the string terminator).
pub fn limit_for_buffer(size: usize) -> usize
{
  size.saturating_sub(1)
}

/// Splits a byte stream into lines of at most `limit` bytes (terminator
/// included) without ever holding more than `limit` bytes of one line.
pub struct LineReader<R>
{
  inner: R,
  limit: usize,
  buf:   Vec<u8>,
}

impl<R: BufRead> LineReader<R>
{
  pub fn new(
    inner: R,
    limit: usize,
  ) -> Self
  {
    Self { inner, limit, buf: Vec::new() }
  }

  pub fn next_line(&mut self) -> io::Result<Option<ReadLine>>
  {
    self.buf.clear();
    let mut overlong = false;
    loop
    {
      let available = match self.inner.fill_buf()
      {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
        Err(e) => return Err(e),
      };
      if available.is_empty()
      {
        // end of input
        if overlong
        {
          return Ok(Some(ReadLine::Overlong));
        }
        if self.buf.is_empty()
        {
          return Ok(None);
        }
        return Ok(Some(ReadLine::Complete(std::mem::take(&mut self.buf))));
      }

      let (chunk, done) = match find_newline(available)
      {
        Some(pos) => (&available[..=pos], true),
        None => (available, false),
      };
      let used = chunk.len();
      if !overlong
      {
        if self.buf.len() + chunk.len() > self.limit
        {
          overlong = true;
          self.buf.clear();
        }
        else
        {
          self.buf.extend_from_slice(chunk);
        }
      }
      self.inner.consume(used);

      if done
      {
        if overlong
        {
          return Ok(Some(ReadLine::Overlong));
        }
        return Ok(Some(ReadLine::Complete(std::mem::take(&mut self.buf))));
      }
    }
  }
}

impl<R: BufRead> Iterator for LineReader<R>
{
  type Item = io::Result<ReadLine>;

  fn next(&mut self) -> Option<Self::Item>
  {
    self.next_line().transpose()
  }
}

fn find_newline(bytes: &[u8]) -> Option<usize>
{
  bytes.iter().position(|&b| b == b'\n')
}
