use std::num::NonZeroUsize;

/// Splits `items` into consecutive chunks of at most `chunk_size`, keeping order.
/// Only the last chunk may be shorter.
pub fn chunk_plan<T: Clone>(items: &[T], chunk_size: NonZeroUsize) -> Vec<Vec<T>> {
    items.chunks(chunk_size.get()).map(<[T]>::to_vec).collect()
}

pub fn chunk_count(len: usize, chunk_size: NonZeroUsize) -> usize {
    len.div_ceil(chunk_size.get())
}
