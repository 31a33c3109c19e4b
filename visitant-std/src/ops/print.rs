//! Polymorphic formatted output.
//!
//! [`Streamer`] writes whatever concrete value it is called with into the
//! sink it owns, through that value's `Display` impl. The free functions plug
//! it into either dispatch strategy and hand the sink back.

use std::{
    fmt::{self, Display},
    io,
};
use visitant_core::{
    AcyclicFnVisitor, AcyclicVisitable, Dispatch, DispatchError, Erase, FnVisitor, Functor,
    Visitable, VisitorSet,
};

/// A functor that writes visited values into a [`fmt::Write`] sink.
///
/// Writing stops at the first error, which is kept and returned by
/// [`finish`](Self::finish).
#[derive(Debug)]
pub struct Streamer<S> {
    sink: S,
    result: fmt::Result,
}

impl<S> Streamer<S> {
    /// Creates a streamer that writes into `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            result: Ok(()),
        }
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the outcome of the writes so far.
    pub fn result(&self) -> fmt::Result {
        self.result
    }

    /// Consumes the streamer, returning the sink and the first write error.
    pub fn finish(self) -> (S, fmt::Result) {
        (self.sink, self.result)
    }
}

impl<S, T> Functor<T> for Streamer<S>
where
    S: fmt::Write,
    T: Display + ?Sized,
{
    fn call(&mut self, target: &T) {
        if self.result.is_ok() {
            self.result = write!(self.sink, "{target}");
        }
    }
}

/// A [`fmt::Write`] view of an [`io::Write`] sink.
///
/// `fmt::Error` carries no detail, so the underlying I/O error is kept aside
/// and recovered with [`finish`](Self::finish).
#[derive(Debug)]
pub struct IoAdapter<'w, W: ?Sized> {
    inner: &'w mut W,
    error: Option<io::Error>,
}

impl<'w, W: io::Write + ?Sized> IoAdapter<'w, W> {
    /// Wraps an I/O sink.
    pub fn new(inner: &'w mut W) -> Self {
        Self { inner, error: None }
    }

    /// Returns the sink, or the first I/O error seen while writing.
    pub fn finish(self) -> io::Result<&'w mut W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.inner),
        }
    }
}

impl<W: io::Write + ?Sized> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

/// Prints a closed-hierarchy variant into `sink`.
///
/// Every member of `V` must implement `Display`. Returns the sink so calls can
/// be chained.
///
/// # Example
/// ```rust,ignore
/// let mut out = String::new();
/// print::<Shapes, _>(&mut out, &Circle { radius: 2.0 })?;
/// assert_eq!(out, "Circle(r=2)");
/// ```
pub fn print<'w, V, W>(
    sink: &'w mut W,
    client: &(impl Visitable<V> + ?Sized),
) -> Result<&'w mut W, DispatchError>
where
    V: VisitorSet,
    W: fmt::Write + ?Sized,
    FnVisitor<Streamer<&'w mut W>>: Erase<V>,
{
    let mut visitor = FnVisitor::new(Streamer::new(sink));
    client.accept(Erase::<V>::erase(&mut visitor));
    let (sink, result) = visitor.into_inner().finish();
    result?;
    Ok(sink)
}

/// Prints an open-hierarchy variant into `sink` if its type is a member of `L`.
///
/// A failed probe leaves the sink unchanged and is not an error.
pub fn print_acyclic<'w, L, W>(
    sink: &'w mut W,
    client: &(impl AcyclicVisitable + ?Sized),
) -> Result<&'w mut W, DispatchError>
where
    L: Dispatch<Streamer<&'w mut W>>,
    W: fmt::Write + ?Sized,
{
    let mut visitor = AcyclicFnVisitor::<L, _>::new(Streamer::new(sink));
    client.try_accept_const(&mut visitor);
    let (sink, result) = visitor.into_inner().finish();
    result?;
    Ok(sink)
}

/// Prints a closed-hierarchy variant into an I/O sink.
///
/// I/O failures are reported as [`DispatchError::Io`].
pub fn print_io<'w, V, W>(
    sink: &'w mut W,
    client: &(impl Visitable<V> + ?Sized),
) -> Result<&'w mut W, DispatchError>
where
    V: VisitorSet,
    W: io::Write + ?Sized,
    FnVisitor<Streamer<IoAdapter<'w, W>>>: Erase<V>,
{
    let mut visitor = FnVisitor::new(Streamer::new(IoAdapter::new(sink)));
    client.accept(Erase::<V>::erase(&mut visitor));
    io_outcome(visitor.into_inner())
}

/// Prints an open-hierarchy variant into an I/O sink if its type is a member
/// of `L`.
pub fn print_acyclic_io<'w, L, W>(
    sink: &'w mut W,
    client: &(impl AcyclicVisitable + ?Sized),
) -> Result<&'w mut W, DispatchError>
where
    L: Dispatch<Streamer<IoAdapter<'w, W>>>,
    W: io::Write + ?Sized,
{
    let mut visitor = AcyclicFnVisitor::<L, _>::new(Streamer::new(IoAdapter::new(sink)));
    client.try_accept_const(&mut visitor);
    io_outcome(visitor.into_inner())
}

fn io_outcome<'w, W: io::Write + ?Sized>(
    streamer: Streamer<IoAdapter<'w, W>>,
) -> Result<&'w mut W, DispatchError> {
    let (adapter, result) = streamer.finish();
    let sink = adapter.finish()?;
    result?;
    Ok(sink)
}
