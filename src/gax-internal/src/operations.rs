// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Polls and cancels long-running operations.

use crate::options::OperationsMethods;
use crate::transport::{Transport, TransportInner};
use gax::Result;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::options::internal::set_default_idempotency;
use std::sync::Weak;

/// The client for the `google.longrunning.Operations` mixin.
///
/// Holds a weak reference to the transport that created it: the transport
/// owns this client, and dropping the transport invalidates it.
#[derive(Debug)]
pub struct OperationsClient {
    transport: Weak<TransportInner>,
    methods: OperationsMethods,
}

impl OperationsClient {
    pub(crate) fn new(transport: Weak<TransportInner>, methods: OperationsMethods) -> Self {
        Self { transport, methods }
    }

    fn transport(&self) -> Result<Transport> {
        self.transport
            .upgrade()
            .map(Transport::from_inner)
            .ok_or_else(Error::transport_closed)
    }
}

#[async_trait::async_trait]
impl lro::internal::OperationsClient for OperationsClient {
    async fn get_operation(
        &self,
        name: String,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        let request = longrunning::model::GetOperationRequest::default().set_name(name);
        self.transport()?
            .invoke(
                self.methods.get_operation,
                request,
                set_default_idempotency(options, true),
            )
            .await
    }

    async fn cancel_operation(&self, name: String, options: RequestOptions) -> Result<()> {
        let request = longrunning::model::CancelOperationRequest::default().set_name(name);
        self.transport()?
            .invoke::<_, wkt::Empty>(
                self.methods.cancel_operation,
                request,
                set_default_idempotency(options, true),
            )
            .await
            .map(|_| ())
    }
}
