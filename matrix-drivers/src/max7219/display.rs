//! MAX7219 chain driver
//!
//! [`Max7219Display`] owns the bus and the module table. It never owns the
//! frame buffer: [`send`](Max7219Display::send) borrows it read-only for the
//! duration of one refresh, so drawing code keeps full access in between.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use heapless::Vec;

use matrix_core::config::{DEFAULT_INTENSITY, SCAN_LIMIT_ALL};
use matrix_core::{Brightness, DeviceDescriptor, ReadBuffer, MODULE_SIZE};

use super::reg::{self, Command};
use super::{Error, CS_SETTLE_US, FRAME_CAPACITY, MAX_DEVICES};

/// Bytes of one chip-select transaction
pub type Frame = Vec<u8, FRAME_CAPACITY>;

/// Daisy chain of MAX7219 chips showing windows of a frame buffer
pub struct Max7219Display<'d, SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
    /// Module table, farthest from the controller first
    devices: &'d [DeviceDescriptor],
}

impl<'d, SPI, CS, D> Max7219Display<'d, SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create a driver for the chain described by `devices`
    ///
    /// Nothing is sent until [`init`](Self::init).
    pub fn new(
        spi: SPI,
        cs: CS,
        delay: D,
        devices: &'d [DeviceDescriptor],
    ) -> Result<Self, Error<SPI::Error, CS::Error>> {
        if devices.len() > MAX_DEVICES {
            warn!(
                "{} devices exceed the chain limit of {}",
                devices.len(),
                MAX_DEVICES
            );
            return Err(Error::TooManyDevices {
                count: devices.len(),
            });
        }

        Ok(Self {
            spi,
            cs,
            delay,
            devices,
        })
    }

    /// Number of chips in the chain
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Module table, farthest first
    pub fn devices(&self) -> &'d [DeviceDescriptor] {
        self.devices
    }

    /// Check that every module window lies inside `buffer`
    ///
    /// Windows that stick out are still rendered, with the missing pixels
    /// dark; this only reports them.
    pub fn fits<B: ReadBuffer + ?Sized>(&self, buffer: &B) -> bool {
        let (width, height) = (buffer.width(), buffer.height());
        let mut all_fit = true;
        for (i, device) in self.devices.iter().enumerate() {
            if !device.fits_within(width, height) {
                warn!(
                    "device {} at ({}, {}) exceeds {}x{} buffer",
                    i,
                    device.x,
                    device.y,
                    width,
                    height
                );
                all_fit = false;
            }
        }
        all_fit
    }

    /// Power-on sequence
    ///
    /// Leaves the chips blanked (shutdown) with test mode off, full
    /// intensity, all 8 rows scanned and BCD decoding off. Call
    /// [`send`](Self::send) and then `shutdown_mode(false)` to show content.
    pub fn init(&mut self) -> Result<(), Error<SPI::Error, CS::Error>> {
        info!("MAX7219 init, {} devices", self.devices.len());

        self.cs.set_high().map_err(Error::ChipSelect)?;
        self.delay.delay_us(CS_SETTLE_US);

        // Known state regardless of what the chips were doing before
        self.shutdown_mode(true)?;
        self.test_mode(false)?;
        self.set_intensity(DEFAULT_INTENSITY)?;
        self.broadcast_command(Command::scan_limit(SCAN_LIMIT_ALL))?;
        self.broadcast_command(Command::decode_mode(0))
    }

    /// Write the same register on every chip in one transaction
    pub fn broadcast(&mut self, register: u8, data: u8) -> Result<(), Error<SPI::Error, CS::Error>> {
        self.broadcast_command(Command::new(register, data))
    }

    /// [`broadcast`](Self::broadcast) taking a [`Command`]
    pub fn broadcast_command(&mut self, command: Command) -> Result<(), Error<SPI::Error, CS::Error>> {
        if self.devices.is_empty() {
            return Ok(());
        }
        let frame = self.frame_with(|_, _| command);
        self.transmit(&frame)
    }

    /// Push the whole frame buffer to the chain
    ///
    /// Eight transactions, one per scan row, each carrying that row for
    /// every module. Calling this again without touching the buffer puts
    /// the identical byte sequence on the bus.
    pub fn send<B: ReadBuffer + ?Sized>(&mut self, buffer: &B) -> Result<(), Error<SPI::Error, CS::Error>> {
        if self.devices.is_empty() {
            return Ok(());
        }

        for row in 0..MODULE_SIZE as u8 {
            let frame = self.scan_frame(buffer, row);
            trace!("scan row {}: {}", row, frame.as_slice());
            self.transmit(&frame)?;
        }
        Ok(())
    }

    /// Transaction bytes for scan row `row` (0-7) without sending them
    ///
    /// Rows past 7 wrap around.
    pub fn scan_frame<B: ReadBuffer + ?Sized>(&self, buffer: &B, row: u8) -> Frame {
        let row = row % MODULE_SIZE as u8;
        self.frame_with(|_, device| Command::row(row, device.scan_row(buffer, row as usize)))
    }

    /// Same intensity on every module, 0-15 (higher values saturate)
    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Error<SPI::Error, CS::Error>> {
        let command = Command::intensity(intensity);
        debug!("intensity {} (requested {})", command.data, intensity);
        self.broadcast_command(command)
    }

    /// Individual intensity per module, in descriptor order
    ///
    /// `levels` must have one entry per device; otherwise nothing is sent
    /// and [`Error::DeviceCountMismatch`] is returned.
    pub fn set_intensity_each(&mut self, levels: &[u8]) -> Result<(), Error<SPI::Error, CS::Error>> {
        if levels.len() != self.devices.len() {
            warn!(
                "{} intensity levels for {} devices",
                levels.len(),
                self.devices.len()
            );
            return Err(Error::DeviceCountMismatch {
                expected: self.devices.len(),
                got: levels.len(),
            });
        }
        if levels.is_empty() {
            return Ok(());
        }

        let frame = self.frame_with(|i, _| Command::intensity(levels[i]));
        self.transmit(&frame)
    }

    /// Blank (`true`) or wake (`false`) every module
    ///
    /// Register contents survive shutdown.
    pub fn shutdown_mode(&mut self, on: bool) -> Result<(), Error<SPI::Error, CS::Error>> {
        debug!("shutdown {}", on);
        self.broadcast_command(Command::shutdown(on))
    }

    /// Light every LED (`true`) or return to normal display
    pub fn test_mode(&mut self, on: bool) -> Result<(), Error<SPI::Error, CS::Error>> {
        self.broadcast_command(Command::display_test(on))
    }

    /// Zero all digit registers; the frame buffer is left alone
    pub fn clear_all(&mut self) -> Result<(), Error<SPI::Error, CS::Error>> {
        for register in reg::DIGIT0..=reg::DIGIT7 {
            self.broadcast(register, 0)?;
        }
        Ok(())
    }

    /// Apply the ambient-light controller's output
    ///
    /// `Off` blanks the chain; a level wakes it and sets the intensity.
    pub fn apply_brightness(&mut self, brightness: Brightness) -> Result<(), Error<SPI::Error, CS::Error>> {
        match brightness.level() {
            None => self.shutdown_mode(true),
            Some(level) => {
                self.shutdown_mode(false)?;
                self.set_intensity(level)
            }
        }
    }

    /// Give back the bus, chip-select pin and delay
    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }

    /// One command per device, placed farthest first
    fn frame_with(&self, mut command_for: impl FnMut(usize, &DeviceDescriptor) -> Command) -> Frame {
        let mut frame = Frame::new();
        for (i, device) in self.devices.iter().enumerate() {
            // Cannot overflow: the table length is checked in `new`
            let _ = frame.extend_from_slice(&command_for(i, device).to_bytes());
        }
        frame
    }

    /// Clock `frame` out inside one chip-select window
    ///
    /// Chip-select is raised again even if the bus fails, so the chips
    /// never stay selected.
    fn transmit(&mut self, frame: &[u8]) -> Result<(), Error<SPI::Error, CS::Error>> {
        self.cs.set_low().map_err(Error::ChipSelect)?;
        let result = self
            .spi
            .write(frame)
            .and_then(|_| self.spi.flush())
            .map_err(Error::Spi);
        self.cs.set_high().map_err(Error::ChipSelect)?;
        self.delay.delay_us(CS_SETTLE_US);
        result
    }
}
