use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::io::AsRawFd;
use nix::ioctl_write_ptr_bad;

// From linux/i2c-dev.h.
ioctl_write_ptr_bad!(i2c_rdwr, 0x0707, I2cRdwrIoctlData);

const I2C_M_RD: libc::c_ushort = 0x0001;

#[repr(C)]
pub struct I2cMsg {
    addr: libc::c_ushort,
    flags: libc::c_ushort,
    len: libc::c_ushort,
    buf: *mut u8,
}

#[repr(C)]
pub struct I2cRdwrIoctlData {
    msgs: *mut I2cMsg,
    nmsgs: libc::c_uint,
}

// Handle on /dev/i2c-N, bound to a single slave address.
// The descriptor is released when the handle is dropped.
pub struct I2cDev {
    file: File,
    address: u16,
}

impl I2cDev {
    pub fn open(bus: u8, address: u16) -> io::Result<I2cDev> {
        let file = OpenOptions::new().read(true).write(true)
                                     .open(format!("/dev/i2c-{}", bus))?;
        Ok(I2cDev { file, address })
    }

    // Combined transaction: send the register address,
    // then read buf.len() bytes with a repeated start.
    pub fn read_block(&mut self, register: u8, buf: &mut [u8]) -> io::Result<()> {
        let mut reg = [register];
        let mut msgs = [
            I2cMsg {
                addr: self.address,
                flags: 0,
                len: reg.len() as libc::c_ushort,
                buf: reg.as_mut_ptr(),
            },
            I2cMsg {
                addr: self.address,
                flags: I2C_M_RD,
                len: buf.len() as libc::c_ushort,
                buf: buf.as_mut_ptr(),
            },
        ];
        let data = I2cRdwrIoctlData {
            msgs: msgs.as_mut_ptr(),
            nmsgs: msgs.len() as libc::c_uint,
        };
        unsafe {
            i2c_rdwr(self.file.as_raw_fd(), &data)
                    .map(|_| ())
                    .map_err(io::Error::from)
        }
    }
}
