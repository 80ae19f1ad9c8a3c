//! Fixed-size record decoding to per-signal [`Series`].

use paramtrace_core::{
    ByteOrder, DataError, Sample, Schema, Series, SignalSpec, TraceError,
};
use tracing::debug;

use crate::primitive::read_value;

/// Decode every record of `data` with `schema`.
///
/// Shorthand for [`RecordDecoder::new`] followed by [`RecordDecoder::decode`].
pub fn decode_records(schema: &Schema, data: &[u8]) -> Result<Vec<Series>, TraceError> {
    RecordDecoder::new(schema)?.decode(data)
}

/// Decoder bound to one schema whose decode preconditions have been checked.
#[derive(Debug, Clone, Copy)]
pub struct RecordDecoder<'a> {
    schema: &'a Schema,
}

impl<'a> RecordDecoder<'a> {
    /// Check that `schema` declares signals, a positive record size, and
    /// little-endian byte order.
    pub fn new(schema: &'a Schema) -> Result<Self, TraceError> {
        if schema.signals.is_empty() {
            return Err(DataError::NoSignals.into());
        }
        if schema.record_size == 0 {
            return Err(DataError::RecordSizeInvalid.into());
        }
        if schema.byte_order != ByteOrder::Little {
            return Err(TraceError::UnsupportedFormat {
                byte_order: schema.byte_order,
            });
        }
        Ok(Self { schema })
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Number of whole records in a buffer of `len` bytes.
    pub fn record_count(&self, len: usize) -> usize {
        len / self.schema.record_size
    }

    /// Decode all whole records; trailing bytes shorter than a record are ignored.
    ///
    /// Samples are appended in record order, so each series has `x` equal to
    /// `0, 1, 2, ...`.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<Series>, TraceError> {
        let records = self.check_input(data)?;
        let record_size = self.schema.record_size;

        let mut out: Vec<Series> = self
            .schema
            .signals
            .iter()
            .map(|s| Series::with_capacity(&s.name, &s.unit, records))
            .collect();

        for (index, record) in data.chunks_exact(record_size).enumerate() {
            let x = index as f64;
            for (signal, series) in self.schema.signals.iter().zip(out.iter_mut()) {
                let y = decode_field(signal, record)?;
                series.samples.push(Sample::new(x, y));
            }
        }

        debug!(records, signals = out.len(), "decoded records");
        Ok(out)
    }

    /// Decode with one rayon task per signal over the shared buffer.
    ///
    /// The result is identical to [`RecordDecoder::decode`].
    #[cfg(feature = "parallel")]
    pub fn decode_parallel(&self, data: &[u8]) -> Result<Vec<Series>, TraceError> {
        use rayon::prelude::*;

        let records = self.check_input(data)?;
        let record_size = self.schema.record_size;

        let out = self
            .schema
            .signals
            .par_iter()
            .map(|signal| {
                let mut series = Series::with_capacity(&signal.name, &signal.unit, records);
                for (index, record) in data.chunks_exact(record_size).enumerate() {
                    let y = decode_field(signal, record)?;
                    series.samples.push(Sample::new(index as f64, y));
                }
                Ok(series)
            })
            .collect::<Result<Vec<_>, DataError>>()?;

        debug!(records, signals = out.len(), "decoded records in parallel");
        Ok(out)
    }

    /// Check the buffer length, then re-check every signal span against the
    /// record size. Returns the record count.
    fn check_input(&self, data: &[u8]) -> Result<usize, DataError> {
        let record_size = self.schema.record_size;
        if data.len() < record_size {
            return Err(DataError::TooShort {
                len: data.len(),
                record_size,
            });
        }
        for signal in &self.schema.signals {
            if signal.end_offset() > record_size {
                return Err(out_of_bounds(signal, record_size));
            }
        }
        Ok(self.record_count(data.len()))
    }
}

fn decode_field(signal: &SignalSpec, record: &[u8]) -> Result<f64, DataError> {
    let raw = record
        .get(signal.byte_offset..)
        .and_then(|field| read_value(signal.value_type, field))
        .ok_or_else(|| out_of_bounds(signal, record.len()))?;
    Ok(signal.apply(raw))
}

fn out_of_bounds(signal: &SignalSpec, record_size: usize) -> DataError {
    DataError::SignalOutOfBounds {
        signal: signal.name.clone(),
        end: signal.end_offset(),
        record_size,
    }
}
