macro_rules! impl_module {
    ($name:ident $(,$fname:ident : $ftype:ty)* $(,~ $dfname:ident : $dftype:ty)*) => {
        pub struct $name {
            client: $crate::client::Client,

            $(
                $fname: $ftype,
            )*

            $(
                $dfname: $dftype,
            )*
        }

        impl $name {
            pub fn new(
                client: $crate::client::Client,
                $(
                    $fname: $ftype,
                )*
            ) -> Self {
                Self {
                    client,
                    $(
                        $fname,
                     )*
                    $(
                        $dfname: Default::default(),
                     )*
                }
            }

            pub fn client(&self) -> &$crate::client::Client {
                &self.client
            }
        }
    };
}

pub(super) use impl_module;
