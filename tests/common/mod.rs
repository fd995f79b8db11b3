#![allow(dead_code)]

use chrono::{DateTime, Duration, Local, TimeZone};
use prettylog::Clock;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Clock the test moves by hand.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Local>>>);

impl ManualClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> Self {
        let start = Local
            .with_ymd_and_hms(year, month, day, hour, min, 0)
            .earliest()
            .expect("valid local time");
        ManualClock(Arc::new(Mutex::new(start)))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.0.lock().unwrap()
    }
}

/// In-memory console.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("division by zero")]
pub struct DivisionByZero;

pub fn divide(a: i64, b: i64) -> Result<i64, DivisionByZero> {
    a.checked_div(b).ok_or(DivisionByZero)
}
