//! Sampling stream adapter
//!
//! Applies the two collaborator-owned sampling knobs to a document stream:
//! the pull cap first (`sample_size`, 0 = unlimited), then the stride
//! filter over the pulled documents (indices 0, N, 2N, ...). Errors are
//! always passed through so a failing stream aborts the scan.

use futures::stream::{BoxStream, StreamExt};

use crate::config::Sampling;

/// Apply sample-size cap and stride to a fallible stream
pub fn apply<'a, T, E>(
    stream: BoxStream<'a, std::result::Result<T, E>>,
    sampling: Sampling,
) -> BoxStream<'a, std::result::Result<T, E>>
where
    T: Send + 'a,
    E: Send + 'a,
{
    let stride = sampling.stride.max(1);

    let capped = if sampling.sample_size > 0 {
        stream.take(sampling.sample_size as usize).boxed()
    } else {
        stream
    };

    if stride == 1 {
        return capped;
    }

    capped
        .enumerate()
        .filter_map(move |(index, item)| {
            let keep = item.is_err() || index % stride == 0;
            futures::future::ready(if keep { Some(item) } else { None })
        })
        .boxed()
}
