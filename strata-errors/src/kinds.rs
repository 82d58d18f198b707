use crate::traits::{ErrorKind, Sealed};

macro_rules! define {
    ($id:ident, $mask:expr, $code:expr) => {
        pub struct $id;

        impl Sealed for $id {
            const CODE: u32 = $code;
            fn is_superclass_of(code: u32) -> bool {
                code & $mask == $code
            }
        }

        impl ErrorKind for $id {}
    };
}

define!(ClientError, 0xFF_00_00_00, 0x01_00_00_00);
define!(NoConnectionError, 0xFF_FF_00_00, 0x01_01_00_00);
define!(TransportError, 0xFF_FF_00_00, 0x01_02_00_00);
define!(EncodeError, 0xFF_FF_00_00, 0x01_03_00_00);
define!(DecodeError, 0xFF_FF_00_00, 0x01_04_00_00);
define!(QueryError, 0xFF_00_00_00, 0x02_00_00_00);
define!(UserError, 0xFF_00_00_00, 0xFE_00_00_00);

pub(crate) fn error_name(code: u32) -> &'static str {
    match code {
        0x01_01_00_00 => "NoConnectionError",
        0x01_02_00_00 => "TransportError",
        0x01_03_00_00 => "EncodeError",
        0x01_04_00_00 => "DecodeError",
        c if c & 0xFF_00_00_00 == 0x01_00_00_00 => "ClientError",
        c if c & 0xFF_00_00_00 == 0x02_00_00_00 => "QueryError",
        c if c & 0xFF_00_00_00 == 0xFE_00_00_00 => "UserError",
        _ => "UnknownError",
    }
}
