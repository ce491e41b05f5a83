// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART debug console and `log` backend.
//!
//! [`init_logger`] parks the console in a critical-section mutex and routes every `log` record to
//! it as one `[LEVEL] message` line. Lines end in CRLF so a plain serial terminal renders them
//! correctly:
//!
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::cell::RefCell;
use core::fmt::{self, Write as _};

use cortex_m::interrupt::{self, Mutex};
use log::{LevelFilter, Log, Metadata, Record};
use nb::block;

use stm32f7xx_hal::{
    pac,
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}

/// Console the logger writes to.
pub type Console = Usart<pac::USART1>;

static CONSOLE: Mutex<RefCell<Option<Console>>> = Mutex::new(RefCell::new(None));

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        interrupt::free(|cs| {
            if let Some(console) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
                let _ = write!(console, "[{}] {}\r\n", record.level(), record.args());
            }
        });
    }

    fn flush(&self) {
        interrupt::free(|cs| {
            if let Some(console) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
                console.flush();
            }
        });
    }
}

/// Hand `console` to the logger and enable records up to `level`.
///
/// A second call only replaces the console; the logger itself is installed once.
pub fn init_logger(console: Console, level: LevelFilter) {
    interrupt::free(|cs| {
        CONSOLE.borrow(cs).replace(Some(console));
    });
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
