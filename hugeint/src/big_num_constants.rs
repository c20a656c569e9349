pub const DIGITS: [char; 36] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f' , 'g' , 'h' ,
    'i' , 'j' , 'k' , 'l' , 'm' , 'n' ,
    'o' , 'p' , 'q' , 'r' , 's' , 't' ,
    'u' , 'v' , 'w' , 'x' , 'y' , 'z'
];

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 36;

/// Below this many words in the shorter operand Karatsuba costs more than it saves.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Decimal rendering accumulates into base-10^9 chunks.
pub const DEC_CHUNK_BASE: u32 = 1_000_000_000;

pub const DEC_CHUNK_DIGITS: usize = 9;

/// Characters skipped anywhere inside a numeral.
pub const SEPARATORS: [char; 2] = ['\'', ' '];
