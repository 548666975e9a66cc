//! Argument rendering
//!
//! Every value a call site can log implements [`Renderable`]: it writes its
//! own textual form straight into a [`Sink`], consulting the per-line
//! [`RenderState`] for the numeric base and float precision. Containers
//! recurse through the same dispatch, so nested sequences and maps come out
//! formatted. There is no intermediate buffer: integers and floats stream
//! through a `fmt::Write` adapter over the sink.

use super::error::{LogError, Result};
use super::log_base::LogBase;
use super::sink::Sink;
use std::collections::{BTreeMap, VecDeque};
use std::fmt::{self, Write as _};

/// Fractional digits used for `f32`/`f64` arguments.
pub const DEFAULT_FLOAT_PRECISION: usize = 2;

/// Transient per-line rendering state.
#[derive(Debug, Clone, Copy)]
pub struct RenderState {
    /// Base applied to integer arguments that follow.
    pub base: LogBase,
    /// Fractional digits for float arguments.
    pub precision: usize,
}

impl RenderState {
    #[must_use]
    pub fn new(base: LogBase) -> Self {
        Self {
            base,
            precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(LogBase::Dec)
    }
}

/// A value that can write itself to a sink.
///
/// # Examples
///
/// ```
/// use debuglog::{LogBase, RenderState, Renderable};
/// use debuglog::sinks::MemorySink;
///
/// let mut sink = MemorySink::new();
/// let mut state = RenderState::new(LogBase::Hex);
/// 255u32.render(&mut sink, &mut state).unwrap();
/// assert_eq!(sink.contents(), "ff");
/// ```
pub trait Renderable {
    /// Write this value's textual form to `out`.
    fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()>;

    /// If this argument is a base-switch directive rather than a value,
    /// return the base it selects. Directives produce no output and consume
    /// no delimiter slot.
    fn as_directive(&self) -> Option<LogBase> {
        None
    }
}

/// Adapter that lets `write!` target a [`Sink`], carrying the sink's error
/// across the `fmt::Error` unit type.
pub(crate) struct SinkWriter<'a> {
    sink: &'a mut dyn Sink,
    error: Option<LogError>,
}

impl<'a> SinkWriter<'a> {
    pub(crate) fn new(sink: &'a mut dyn Sink) -> Self {
        Self { sink, error: None }
    }

    /// Map a `write!` outcome back to the sink's own error.
    pub(crate) fn finish(self, result: fmt::Result) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(_) => Err(self
                .error
                .unwrap_or_else(|| LogError::render("formatting failed"))),
        }
    }
}

impl fmt::Write for SinkWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_str(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

macro_rules! impl_renderable_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Renderable for $ty {
                fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
                    let mut w = SinkWriter::new(out);
                    // Negative values in non-decimal bases print their
                    // two's-complement digits.
                    let result = match state.base {
                        LogBase::Bin => write!(w, "{:b}", self),
                        LogBase::Oct => write!(w, "{:o}", self),
                        LogBase::Dec => write!(w, "{}", self),
                        LogBase::Hex => write!(w, "{:x}", self),
                    };
                    w.finish(result)
                }
            }
        )*
    };
}

impl_renderable_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_renderable_for_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Renderable for $ty {
                fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
                    let mut w = SinkWriter::new(out);
                    let result = write!(w, "{:.*}", state.precision, self);
                    w.finish(result)
                }
            }
        )*
    };
}

impl_renderable_for_float!(f32, f64);

impl Renderable for str {
    fn render(&self, out: &mut dyn Sink, _state: &mut RenderState) -> Result<()> {
        out.write_str(self)
    }
}

impl Renderable for String {
    fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
        self.as_str().render(out, state)
    }
}

impl Renderable for char {
    fn render(&self, out: &mut dyn Sink, _state: &mut RenderState) -> Result<()> {
        out.write_str(self.encode_utf8(&mut [0u8; 4]))
    }
}

impl Renderable for bool {
    fn render(&self, out: &mut dyn Sink, _state: &mut RenderState) -> Result<()> {
        out.write_str(if *self { "true" } else { "false" })
    }
}

impl Renderable for LogBase {
    fn render(&self, _out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
        state.base = *self;
        Ok(())
    }

    fn as_directive(&self) -> Option<LogBase> {
        Some(*self)
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
        (**self).render(out, state)
    }

    fn as_directive(&self) -> Option<LogBase> {
        (**self).as_directive()
    }
}

fn render_sequence<'a, T, I>(items: I, out: &mut dyn Sink, state: &mut RenderState) -> Result<()>
where
    T: Renderable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    out.write_str("[")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.write_str(", ")?;
        }
        item.render(out, state)?;
    }
    out.write_str("]")
}

impl<T: Renderable> Renderable for [T] {
    fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
        render_sequence(self, out, state)
    }
}

impl<T: Renderable, const N: usize> Renderable for [T; N] {
    fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
        render_sequence(self, out, state)
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
        render_sequence(self, out, state)
    }
}

impl<T: Renderable> Renderable for VecDeque<T> {
    fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
        render_sequence(self, out, state)
    }
}

impl<K: Renderable, V: Renderable> Renderable for BTreeMap<K, V> {
    fn render(&self, out: &mut dyn Sink, state: &mut RenderState) -> Result<()> {
        out.write_str("{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            key.render(out, state)?;
            out.write_str(":")?;
            value.render(out, state)?;
        }
        out.write_str("}")
    }
}

/// Bridge for any [`fmt::Display`] value not covered by the built-in impls.
///
/// # Examples
///
/// ```
/// use debuglog::{AsText, RenderState, Renderable};
/// use debuglog::sinks::MemorySink;
///
/// let mut sink = MemorySink::new();
/// let mut state = RenderState::default();
/// AsText(std::net::Ipv4Addr::LOCALHOST)
///     .render(&mut sink, &mut state)
///     .unwrap();
/// assert_eq!(sink.contents(), "127.0.0.1");
/// ```
pub struct AsText<T: fmt::Display>(pub T);

impl<T: fmt::Display> Renderable for AsText<T> {
    fn render(&self, out: &mut dyn Sink, _state: &mut RenderState) -> Result<()> {
        let mut w = SinkWriter::new(out);
        let result = write!(w, "{}", self.0);
        w.finish(result)
    }
}
