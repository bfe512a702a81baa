macro_rules! impl_num_enums {
    ($tname:ident, $($vname:ident = $val:literal,)+) => {
        impl_num_enums!($tname, u8, $($vname = $val,)+);
    };

    ($tname:ident, $nty:ident, $($vname:ident = $val:literal,)+) => {
        #[repr($nty)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $tname {
            $(
                $vname = $val,
             )+
        }

        impl std::convert::TryFrom<$nty> for $tname {
            type Error = $crate::Error;

            fn try_from(val: $nty) -> Result<Self, Self::Error> {
                Ok(match val {
                    $(
                        $val => $tname::$vname,
                     )+
                    other => return Err($crate::Error::InvalidData(format!("unexpected value {} for {}", other, stringify!($tname)).into())),
                })
            }
        }
    };
}

macro_rules! impl_name_table {
    ($tname:ident, $($vname:ident => $s:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $tname {
            $(
                $vname,
             )+
        }

        impl $tname {
            pub const ALL: &'static [$tname] = &[$($tname::$vname,)+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(
                        $tname::$vname => $s,
                     )+
                }
            }
        }

        impl std::str::FromStr for $tname {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s {
                    $(
                        $s => $tname::$vname,
                     )+
                    other => return Err($crate::Error::UnrecognizedSetting(other.to_owned())),
                })
            }
        }

        impl std::fmt::Display for $tname {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use impl_name_table;
pub(crate) use impl_num_enums;
