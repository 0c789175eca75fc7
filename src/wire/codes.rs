//! Code tables for the monitor envelope and the virtio transport.

use crate::symbol::CodeTable;

/// Define a `#[repr(u16)]` enum together with its [`CodeTable`] impl.
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident, fallback $fallback:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal => $label:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u16)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $code,
            )+
        }

        impl CodeTable for $name {
            const FALLBACK: &'static str = $fallback;

            fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn code(self) -> u16 { self as u16 }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}

code_table! {
    /// Transport kind recorded in the envelope's type tag.
    pub enum EnvelopeType, fallback "Invalid type" {
        /// Transport-agnostic event with no transport header.
        Generic = 1 => "GENERIC",
        /// Event carrying a virtio-vsock packet header.
        Virtio = 2 => "VIRTIO",
    }
}

code_table! {
    /// Operation recorded in the generic sub-header.
    pub enum GenericOp, fallback "invalid op" {
        Unknown = 0 => "UNKNOWN",
        Connect = 1 => "CONNECT",
        Disconnect = 2 => "DISCONNECT",
        Control = 3 => "CONTROL",
        /// Data transfer; the payload follows the fixed header.
        Payload = 4 => "PAYLOAD",
    }
}

code_table! {
    /// Socket type carried by a virtio-vsock header.
    pub enum VirtioType, fallback "Invalid type" {
        Stream = 1 => "STREAM",
    }
}

code_table! {
    /// Packet operation carried by a virtio-vsock header.
    pub enum VirtioOp, fallback "Invalid op" {
        Invalid = 0 => "INVALID",
        Request = 1 => "REQUEST",
        Response = 2 => "RESPONSE",
        Rst = 3 => "RST",
        Shutdown = 4 => "SHUTDOWN",
        Rw = 5 => "RW",
        CreditUpdate = 6 => "CREDIT_UPDATE",
        CreditRequest = 7 => "CREDIT_REQUEST",
    }
}
