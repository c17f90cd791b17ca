#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $component:ty, $error:ty, $component_snake:ident) => {
        paste::paste! {
            #[allow(dead_code)]
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<render_ $component_snake>](&self) -> Result<$crate::view::Node, $error> {
                    tracing::debug!("Sending request");
                    self.inner.render().await.map_err(<$error>::from)
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<snapshot_ $component_snake>](&self) -> Result<$component, $error> {
                    tracing::debug!("Sending request");
                    self.inner.snapshot().await.map_err(<$error>::from)
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $component:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::component_framework::HostClient<$component>) -> Self {
                Self { inner }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $component:ty, $error:ty, $component_snake:ident) => {
        $crate::impl_client_new!($client_name, $component);
        $crate::impl_client_methods!($client_name, $component, $error, $component_snake);
    };
}
