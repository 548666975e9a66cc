//! Main log manager implementation

use super::{
    config::LogConfig,
    error::Result,
    header::format_header,
    log_base::LogBase,
    log_level::LogLevel,
    render::{RenderState, Renderable},
    sink::{OpenMode, Sink, Storage, StorageSink},
};
use crate::sinks::StdoutSink;
use std::path::Path;
use std::time::Duration;

/// How long the default halt handler sleeps per iteration of the halt loop.
///
/// Used when an assertion fails and no custom handler was installed. For
/// custom halt behavior (reset, watchdog kick, test panic), install a
/// handler with [`LogManager::set_halt_handler`].
pub const DEFAULT_HALT_INTERVAL: Duration = Duration::from_secs(5);

/// Callback invoked repeatedly, forever, after a failed assertion.
pub type HaltHandler = Box<dyn FnMut()>;

/// Tee writer that forwards one rendering pass to every warranted sink.
///
/// This is the swallow point of the engine: transport failures are absorbed
/// here, so a line that fails to reach one sink still reaches the other and
/// nothing is ever reported back to the call site.
struct Fanout<'a> {
    console: Option<&'a mut dyn Sink>,
    storage: Option<&'a mut (dyn StorageSink + 'static)>,
}

impl Sink for Fanout<'_> {
    fn write_str(&mut self, text: &str) -> Result<()> {
        if let Some(console) = self.console.as_mut() {
            let _ = console.write_str(text);
        }
        if let Some(storage) = self.storage.as_mut() {
            let _ = storage.write_str(text);
        }
        Ok(())
    }

    fn write_line(&mut self) -> Result<()> {
        if let Some(console) = self.console.as_mut() {
            let _ = console.write_line();
        }
        if let Some(storage) = self.storage.as_mut() {
            let _ = storage.write_line();
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(console) = self.console.as_mut() {
            let _ = console.flush();
        }
        if let Some(storage) = self.storage.as_mut() {
            let _ = storage.flush();
        }
        Ok(())
    }
}

/// Render `args` into `out`, joined by `delimiter`.
///
/// Base directives are intercepted here: they mutate `state` and consume no
/// delimiter slot, so `(1, Hex, 255)` comes out as `1 ff` with a single
/// delimiter.
fn render_args(
    out: &mut dyn Sink,
    args: &[&dyn Renderable],
    delimiter: &str,
    state: &mut RenderState,
) {
    let mut first = true;
    for arg in args {
        if let Some(base) = arg.as_directive() {
            state.base = base;
            continue;
        }
        if !first {
            let _ = out.write_str(delimiter);
        }
        first = false;
        let _ = arg.render(out, state);
    }
}

/// Leveled, dual-sink log manager.
///
/// Owns one always-present console sink and at most one persistent storage
/// sink, each gated by its own severity threshold. An explicitly constructed
/// context object: create one, pass `&mut` where logging happens. No interior
/// locking; exclusive access is encoded in the `&mut self` methods.
///
/// # Example
///
/// ```
/// use debuglog::{log_info, LogLevel, LogManager};
/// use debuglog::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let mut manager = LogManager::builder()
///     .console_level(LogLevel::Debug)
///     .console(Box::new(sink.clone()))
///     .build();
///
/// log_info!(manager, "boot complete, code", 0);
/// assert!(sink.contents().ends_with(": boot complete, code 0\n"));
/// ```
pub struct LogManager {
    console: Box<dyn Sink>,
    storage: Option<Box<dyn StorageSink>>,
    config: LogConfig,
    /// Base applied to the next numeric argument; reset policy in `config`.
    base: LogBase,
    on_halt: HaltHandler,
}

impl LogManager {
    /// Create a manager with default configuration, logging to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LogConfig::default())
    }

    /// Create a manager with the given configuration, logging to stdout.
    #[must_use]
    pub fn with_config(config: LogConfig) -> Self {
        Self {
            console: Box::new(StdoutSink::new()),
            storage: None,
            config,
            base: LogBase::Dec,
            on_halt: Box::new(|| std::thread::sleep(DEFAULT_HALT_INTERVAL)),
        }
    }

    pub fn set_console_level(&mut self, level: LogLevel) {
        self.config.console_level = level;
    }

    #[must_use]
    pub fn console_level(&self) -> LogLevel {
        self.config.console_level
    }

    pub fn set_storage_level(&mut self, level: LogLevel) {
        self.config.storage_level = level;
    }

    #[must_use]
    pub fn storage_level(&self) -> LogLevel {
        self.config.storage_level
    }

    /// Replace the console transport.
    pub fn attach_console(&mut self, sink: Box<dyn Sink>) {
        self.console = sink;
    }

    /// Open a persistent sink at `path` through the given storage backend.
    ///
    /// Any previously attached sink is flushed and closed first. Returns
    /// `true` on success; on failure the manager degrades to console-only
    /// operation and every storage-path operation becomes a no-op.
    pub fn attach_storage(
        &mut self,
        storage: &mut dyn Storage,
        path: impl AsRef<Path>,
        mode: OpenMode,
        auto_flush: bool,
    ) -> bool {
        self.close_storage();
        match storage.open(path.as_ref(), mode) {
            Ok(sink) => {
                self.storage = Some(sink);
                self.config.auto_flush = auto_flush;
                true
            }
            Err(_) => false,
        }
    }

    /// Flush, close and release the persistent sink, if any.
    pub fn close_storage(&mut self) {
        if let Some(mut sink) = self.storage.take() {
            let _ = sink.flush();
            let _ = sink.close();
        }
    }

    /// Flush the persistent sink, if open.
    pub fn flush(&mut self) {
        if let Some(sink) = self.storage.as_mut() {
            let _ = sink.flush();
        }
    }

    /// Whether a persistent sink is attached and open. This is the only
    /// health signal the storage path exposes.
    #[must_use]
    pub fn is_storage_open(&self) -> bool {
        self.storage.as_ref().is_some_and(|sink| sink.is_open())
    }

    /// Route one leveled record.
    ///
    /// Computes delivery for each sink independently, then performs a single
    /// rendering pass fanned out to every warranted sink. When neither sink
    /// wants the record, returns before any formatting work.
    pub fn log(
        &mut self,
        level: LogLevel,
        file: &str,
        line: u32,
        func: &str,
        args: &[&dyn Renderable],
    ) {
        let console_on = level.enabled_for(self.config.console_level);
        let storage_on = self.storage.as_ref().is_some_and(|sink| sink.is_open())
            && level.enabled_for(self.config.storage_level);
        if !console_on && !storage_on {
            return;
        }

        let header = format_header(level, file, line, func, &self.config);
        let mut state = RenderState::new(self.base);
        {
            let mut fan = Fanout {
                console: console_on.then_some(self.console.as_mut()),
                storage: if storage_on {
                    self.storage.as_deref_mut()
                } else {
                    None
                },
            };
            let _ = fan.write_str(&header);
            render_args(&mut fan, args, &self.config.delimiter, &mut state);
            let _ = fan.write_line();
        }
        self.finish_line(state, storage_on);
    }

    /// Render `args` to the console and any open persistent sink, bypassing
    /// both thresholds and emitting no header or terminator.
    pub fn print(&mut self, args: &[&dyn Renderable]) {
        self.emit_unconditional(args, false);
    }

    /// Like [`print`](Self::print), but terminates the line.
    pub fn println(&mut self, args: &[&dyn Renderable]) {
        self.emit_unconditional(args, true);
    }

    fn emit_unconditional(&mut self, args: &[&dyn Renderable], terminate: bool) {
        let storage_open = self.storage.as_ref().is_some_and(|sink| sink.is_open());
        let mut state = RenderState::new(self.base);
        {
            let mut fan = Fanout {
                console: Some(self.console.as_mut()),
                storage: if storage_open {
                    self.storage.as_deref_mut()
                } else {
                    None
                },
            };
            render_args(&mut fan, args, &self.config.delimiter, &mut state);
            if terminate {
                let _ = fan.write_line();
            }
        }
        self.finish_line(state, terminate && storage_open);
    }

    /// Base-reset policy and auto-flush, applied at the end of every call.
    fn finish_line(&mut self, state: RenderState, flush_candidate: bool) {
        self.base = if self.config.persist_base {
            state.base
        } else {
            LogBase::Dec
        };
        if flush_candidate && self.config.auto_flush {
            self.flush();
        }
    }

    /// Halting assertion.
    ///
    /// When `condition` is false, emits exactly one
    /// `[ASSERT] file line func : expr` line (with ` => msg` appended when a
    /// message is given) to the console and any open persistent sink, flushes
    /// storage, then loops over the installed halt handler forever. Does not
    /// return on failure.
    pub fn assertion(
        &mut self,
        condition: bool,
        file: &str,
        line: u32,
        func: &str,
        expr: &str,
        msg: Option<&str>,
    ) {
        if condition {
            return;
        }

        let mut text = format!("[ASSERT] {} {} {} : {}", file, line, func, expr);
        if let Some(msg) = msg {
            text.push_str(" => ");
            text.push_str(msg);
        }
        let storage_open = self.storage.as_ref().is_some_and(|sink| sink.is_open());
        {
            let mut fan = Fanout {
                console: Some(self.console.as_mut()),
                storage: if storage_open {
                    self.storage.as_deref_mut()
                } else {
                    None
                },
            };
            let _ = fan.write_str(&text);
            let _ = fan.write_line();
            let _ = fan.flush();
        }
        loop {
            (self.on_halt)();
        }
    }

    /// Set the text inserted between adjacent arguments.
    pub fn set_delimiter<S: Into<String>>(&mut self, delimiter: S) {
        self.config.delimiter = delimiter.into();
    }

    /// Choose which source-location fields appear in line headers.
    pub fn set_header_fields(&mut self, file: bool, line: bool, func: bool) {
        self.config.include_file = file;
        self.config.include_line = line;
        self.config.include_func = func;
    }

    /// Keep the numeric base across calls instead of resetting to decimal.
    pub fn set_persist_base(&mut self, persist: bool) {
        self.config.persist_base = persist;
    }

    /// Replace the handler looped over after a failed assertion.
    pub fn set_halt_handler(&mut self, handler: HaltHandler) {
        self.on_halt = handler;
    }

    #[must_use]
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LogConfig) {
        self.config = config;
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`LogManager`] with a fluent API
///
/// # Example
/// ```
/// use debuglog::{LogLevel, LogManager};
///
/// let manager = LogManager::builder()
///     .console_level(LogLevel::Debug)
///     .storage_level(LogLevel::Error)
///     .delimiter(", ")
///     .build();
///
/// assert_eq!(manager.console_level(), LogLevel::Debug);
/// ```
pub struct LogManagerBuilder {
    config: LogConfig,
    console: Option<Box<dyn Sink>>,
    on_halt: Option<HaltHandler>,
}

impl LogManagerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
            console: None,
            on_halt: None,
        }
    }

    /// Set the console severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn console_level(mut self, level: LogLevel) -> Self {
        self.config.console_level = level;
        self
    }

    /// Set the persistent-sink severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn storage_level(mut self, level: LogLevel) -> Self {
        self.config.storage_level = level;
        self
    }

    /// Set the argument delimiter
    #[must_use = "builder methods return a new value"]
    pub fn delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    /// Choose which source-location fields appear in line headers
    #[must_use = "builder methods return a new value"]
    pub fn header_fields(mut self, file: bool, line: bool, func: bool) -> Self {
        self.config = self.config.with_header_fields(file, line, func);
        self
    }

    /// Keep the numeric base across calls
    #[must_use = "builder methods return a new value"]
    pub fn persist_base(mut self, persist: bool) -> Self {
        self.config.persist_base = persist;
        self
    }

    /// Replace the console transport
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, sink: Box<dyn Sink>) -> Self {
        self.console = Some(sink);
        self
    }

    /// Install the assertion halt handler
    #[must_use = "builder methods return a new value"]
    pub fn halt_handler(mut self, handler: HaltHandler) -> Self {
        self.on_halt = Some(handler);
        self
    }

    /// Build the LogManager
    pub fn build(self) -> LogManager {
        let mut manager = LogManager::with_config(self.config);
        if let Some(console) = self.console {
            manager.attach_console(console);
        }
        if let Some(on_halt) = self.on_halt {
            manager.set_halt_handler(on_halt);
        }
        manager
    }
}

impl Default for LogManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogManager {
    /// Create a builder for LogManager
    ///
    /// # Example
    /// ```
    /// use debuglog::{LogLevel, LogManager};
    ///
    /// let manager = LogManager::builder()
    ///     .console_level(LogLevel::Trace)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LogManagerBuilder {
        LogManagerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    fn memory_manager(console_level: LogLevel) -> (LogManager, MemorySink) {
        let sink = MemorySink::new();
        let manager = LogManager::builder()
            .console_level(console_level)
            .console(Box::new(sink.clone()))
            .build();
        (manager, sink)
    }

    #[test]
    fn test_builder_basic() {
        let manager = LogManager::builder()
            .console_level(LogLevel::Debug)
            .storage_level(LogLevel::Error)
            .build();

        assert_eq!(manager.console_level(), LogLevel::Debug);
        assert_eq!(manager.storage_level(), LogLevel::Error);
        assert!(!manager.is_storage_open());
    }

    #[test]
    fn test_builder_default() {
        let manager = LogManagerBuilder::default().build();
        assert_eq!(manager.console_level(), LogLevel::Info);
        assert_eq!(manager.storage_level(), LogLevel::Info);
    }

    #[test]
    fn test_level_setters() {
        let mut manager = LogManager::new();
        manager.set_console_level(LogLevel::None);
        manager.set_storage_level(LogLevel::Trace);
        assert_eq!(manager.console_level(), LogLevel::None);
        assert_eq!(manager.storage_level(), LogLevel::Trace);
    }

    #[test]
    fn test_log_emits_header_and_arguments() {
        let (mut manager, sink) = memory_manager(LogLevel::Info);
        manager.log(LogLevel::Info, "main.rs", 42, "app::run", &[&"hello", &1u32]);
        assert_eq!(sink.contents(), "[INFO] main.rs L.42 app::run : hello 1\n");
    }

    #[test]
    fn test_log_below_threshold_is_suppressed() {
        let (mut manager, sink) = memory_manager(LogLevel::Warn);
        manager.log(LogLevel::Info, "main.rs", 1, "f", &[&"nope"]);
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn test_none_threshold_suppresses_everything() {
        let (mut manager, sink) = memory_manager(LogLevel::None);
        manager.log(LogLevel::Error, "main.rs", 1, "f", &[&"nope"]);
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn test_print_bypasses_threshold() {
        let (mut manager, sink) = memory_manager(LogLevel::None);
        manager.print(&[&"raw", &7u8]);
        assert_eq!(sink.contents(), "raw 7");

        manager.println(&[&"line"]);
        assert_eq!(sink.contents(), "raw 7line\n");
    }

    #[test]
    fn test_delimiter_change() {
        let (mut manager, sink) = memory_manager(LogLevel::Info);
        manager.set_delimiter(" and ");
        manager.print(&[&1u8, &2u8, &3u8]);
        assert_eq!(sink.contents(), "1 and 2 and 3");
    }

    #[test]
    fn test_base_directive_consumes_no_delimiter_slot() {
        let (mut manager, sink) = memory_manager(LogLevel::Info);
        manager.print(&[&1u8, &LogBase::Hex, &255u32]);
        assert_eq!(sink.contents(), "1 ff");
    }

    #[test]
    fn test_base_resets_after_each_call() {
        let (mut manager, sink) = memory_manager(LogLevel::Info);
        manager.print(&[&LogBase::Hex, &255u32]);
        manager.print(&[&255u32]);
        assert_eq!(sink.contents(), "ff255");
    }

    #[test]
    fn test_persist_base_keeps_base_across_calls() {
        let (mut manager, sink) = memory_manager(LogLevel::Info);
        manager.set_persist_base(true);
        manager.print(&[&LogBase::Hex, &255u32]);
        manager.print(&[&255u32]);
        assert_eq!(sink.contents(), "ffff");
    }

    #[test]
    fn test_header_fields_can_be_hidden() {
        let (mut manager, sink) = memory_manager(LogLevel::Info);
        manager.set_header_fields(false, false, false);
        manager.log(LogLevel::Warn, "main.rs", 9, "f", &[&"short"]);
        assert_eq!(sink.contents(), "[WARN] : short\n");
    }

    #[test]
    fn test_flush_without_storage_is_a_noop() {
        let mut manager = LogManager::new();
        manager.flush();
        manager.close_storage();
        assert!(!manager.is_storage_open());
    }

    #[test]
    fn test_assertion_passes_without_output() {
        let (mut manager, sink) = memory_manager(LogLevel::Info);
        manager.assertion(true, "main.rs", 3, "f", "1 == 1", None);
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn test_set_config_replaces_everything() {
        let mut manager = LogManager::new();
        let config = LogConfig::new()
            .with_console_level(LogLevel::Trace)
            .with_delimiter("|");
        manager.set_config(config.clone());
        assert_eq!(manager.config(), &config);
    }
}
