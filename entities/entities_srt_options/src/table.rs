//! Option Table Module
//!
//! The immutable registry of recognised options. Declaration order is the
//! order in which the configuration phases visit options, and therefore the
//! order in which failures are reported.

use crate::descriptor::{OptionDescriptor, SocketOptionId as Id, TRANSTYPE_SYMBOLS};
use crate::option_type::OptionBinding::{Post, Pre};
use crate::option_type::{OptionBinding, OptionType::*};

/// All recognised options, in declaration order
pub static SRT_OPTIONS: [OptionDescriptor; 27] = [
    OptionDescriptor::new("maxbw", Id::MAXBW, Pre, Int64),
    OptionDescriptor::new("pbkeylen", Id::PBKEYLEN, Pre, Int32),
    OptionDescriptor::new("passphrase", Id::PASSPHRASE, Pre, String).secret(),
    OptionDescriptor::new("mss", Id::MSS, Pre, Int32),
    OptionDescriptor::new("fc", Id::FC, Pre, Int32),
    OptionDescriptor::new("sndbuf", Id::SNDBUF, Pre, Int32),
    OptionDescriptor::new("rcvbuf", Id::RCVBUF, Pre, Int32),
    OptionDescriptor::new("ipttl", Id::IPTTL, Pre, Int32),
    OptionDescriptor::new("iptos", Id::IPTOS, Pre, Int32),
    OptionDescriptor::new("inputbw", Id::INPUTBW, Post, Int64),
    OptionDescriptor::new("oheadbw", Id::OHEADBW, Post, Int32),
    OptionDescriptor::new("latency", Id::LATENCY, Pre, Int32),
    OptionDescriptor::new("tsbpddelay", Id::TSBPDDELAY, Pre, Int32),
    OptionDescriptor::new("tlpktdrop", Id::TLPKTDROP, Pre, Bool),
    OptionDescriptor::new("nakreport", Id::NAKREPORT, Pre, Bool),
    OptionDescriptor::new("conntimeo", Id::CONNTIMEO, Pre, Int32),
    OptionDescriptor::new("lossmaxttl", Id::LOSSMAXTTL, Pre, Int32),
    OptionDescriptor::new("rcvlatency", Id::RCVLATENCY, Pre, Int32),
    OptionDescriptor::new("peerlatency", Id::PEERLATENCY, Pre, Int32),
    OptionDescriptor::new("minversion", Id::MINVERSION, Pre, Int32),
    OptionDescriptor::new("streamid", Id::STREAMID, Pre, String),
    OptionDescriptor::new("smoother", Id::SMOOTHER, Pre, String),
    OptionDescriptor::new("messageapi", Id::MESSAGEAPI, Pre, Bool),
    OptionDescriptor::new("payloadsize", Id::PAYLOADSIZE, Pre, Int32),
    OptionDescriptor::new("transtype", Id::TRANSTYPE, Pre, Enum).with_symbols(&TRANSTYPE_SYMBOLS),
    OptionDescriptor::new("kmrefreshrate", Id::KMREFRESHRATE, Pre, Int32),
    OptionDescriptor::new("kmpreannounce", Id::KMPREANNOUNCE, Pre, Int32),
];

/// Look up a descriptor by its exact, case-sensitive name
///
/// Unrecognised names are not an error; callers ignore them.
pub fn lookup(name: &str) -> Option<&'static OptionDescriptor> {
    SRT_OPTIONS.iter().find(|descriptor| descriptor.name == name)
}

/// The whole table in declaration order
pub fn options() -> &'static [OptionDescriptor] {
    &SRT_OPTIONS
}

/// Descriptors applied in the given phase, in declaration order
pub fn options_with_binding(
    binding: OptionBinding,
) -> impl Iterator<Item = &'static OptionDescriptor> {
    SRT_OPTIONS
        .iter()
        .filter(move |descriptor| descriptor.binding == binding)
}
