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

//! Helpers to interpret the `google.longrunning.Operation` resource.

use crate::State;
use gax::Result;
use gax::error::Error;
use gax::error::rpc::Code;
use gax::polling_error_policy::PollingErrorPolicy;
use gax::retry_result::RetryResult;
use longrunning::model::Operation;
use std::time::Instant;

pub(crate) fn state_of(op: &Operation) -> State {
    if !op.done {
        return State::Running;
    }
    match op.error() {
        Some(status) if Code::from(status.code) == Code::Cancelled => State::Cancelled,
        Some(_) => State::Failed,
        None => State::Succeeded,
    }
}

/// Extracts the result of a completed operation.
///
/// A completed operation must set either the response *or* the error. Setting
/// neither is a deserialization error, as the incoming data does not satisfy
/// the invariants required by the receiving type.
pub(crate) fn as_result<R>(op: &Operation) -> Result<R>
where
    R: wkt::message::Message,
{
    match (op.response(), op.error()) {
        (Some(any), _) => any.to_msg::<R>().map_err(Error::deser),
        (None, Some(status)) => {
            let error = Error::service(gax::error::rpc::Status::from(status));
            if Code::from(status.code) == Code::Cancelled {
                return Err(Error::cancelled(error));
            }
            Err(error)
        }
        (None, None) => Err(Error::deser(
            "neither response nor error set in completed operation",
        )),
    }
}

pub(crate) fn as_metadata<M>(op: &Operation) -> Option<M>
where
    M: wkt::message::Message,
{
    op.metadata.as_ref().and_then(|a| a.to_msg::<M>().ok())
}

/// Classifies an error returned by the polling RPC.
///
/// Returns `Ok(error)` if polling may continue, and `Err(error)` if polling
/// must stop.
pub(crate) fn classify_polling_error(
    policy: &dyn PollingErrorPolicy,
    loop_start: Instant,
    attempt_count: u32,
    error: Error,
) -> std::result::Result<Error, Error> {
    match policy.on_error(loop_start, attempt_count, error) {
        RetryResult::Continue(e) => Ok(e),
        RetryResult::Exhausted(e) => Err(Error::exhausted(e)),
        RetryResult::Permanent(e) => Err(e),
    }
}
