#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, io, sync::Arc};

use ctor::ctor;
use saturn_input::{
    HostEnvironment, InputSource, PeripheralBus, SharedRegister,
    device::{ControllerInfo, InputDescriptor},
    retro,
};
use parking_lot::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[ctor]
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(Level::TRACE)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber scoped to the current thread and returns the
/// formatted events it emitted.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = FmtSubscriber::builder()
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Input source answering from a table; unset elements read zero.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    values: HashMap<(u32, u32, u32, u32), i16>,
    queries: RefCell<Vec<u32>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, port: u32, device: u32, index: u32, id: u32, value: i16) -> &mut Self {
        self.values.insert((port, device, index, id), value);
        self
    }

    pub fn press(&mut self, port: u32, id: u32) -> &mut Self {
        self.set(port, retro::DEVICE_JOYPAD, 0, id, 1)
    }

    pub fn release(&mut self, port: u32, id: u32) -> &mut Self {
        self.values.remove(&(port, retro::DEVICE_JOYPAD, 0, id));
        self
    }

    pub fn analog(&mut self, port: u32, index: u32, id: u32, value: i16) -> &mut Self {
        self.set(port, retro::DEVICE_ANALOG, index, id, value)
    }

    pub fn lightgun(&mut self, port: u32, id: u32, value: i16) -> &mut Self {
        self.set(port, retro::DEVICE_LIGHTGUN, 0, id, value)
    }

    pub fn mouse(&mut self, port: u32, id: u32, value: i16) -> &mut Self {
        self.set(port, retro::DEVICE_MOUSE, 0, id, value)
    }

    /// Sorted, deduplicated list of ports queried so far.
    pub fn queried_ports(&self) -> Vec<u32> {
        let mut ports = self.queries.borrow().clone();
        ports.sort_unstable();
        ports.dedup();
        ports
    }
}

impl InputSource for ScriptedInput {
    fn state(&self, port: u32, device: u32, index: u32, id: u32) -> i16 {
        self.queries.borrow_mut().push(port);
        self.values
            .get(&(port, device, index, id))
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct RecordingBus {
    pub bindings: HashMap<usize, (&'static str, SharedRegister)>,
    pub bind_calls: usize,
    pub multitap_calls: Vec<(usize, bool)>,
}

impl PeripheralBus for RecordingBus {
    fn bind_input(&mut self, port: usize, key: &'static str, buffer: SharedRegister) {
        self.bind_calls += 1;
        self.bindings.insert(port, (key, buffer));
    }

    fn set_multitap(&mut self, adapter: usize, enabled: bool) {
        self.multitap_calls.push((adapter, enabled));
    }
}

impl RecordingBus {
    pub fn key(&self, port: usize) -> Option<&'static str> {
        self.bindings.get(&port).map(|(key, _)| *key)
    }
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub messages: Vec<(String, u32)>,
    pub controller_ports: usize,
    pub descriptors: usize,
}

impl HostEnvironment for RecordingHost {
    fn show_message(&mut self, text: &str, frames: u32) {
        self.messages.push((text.to_owned(), frames));
    }

    fn set_controller_info(&mut self, ports: &[ControllerInfo]) {
        self.controller_ports = ports.len();
    }

    fn set_input_descriptors(&mut self, descriptors: &[InputDescriptor]) {
        self.descriptors = descriptors.len();
    }
}
