pub mod dispatcher;

pub trait ByteConsumer: Send {
    fn consume(&mut self, chunk: &[u8]) -> bool;

    fn flush(&mut self) {}

    fn name(&self) -> &str;
}
