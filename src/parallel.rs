//! Parallel batch execution of independent draw requests.
//!
//! Expanders share no mutable state, so distinct requests with distinct
//! output buffers can run on any thread. The dispatch table is built before
//! the batch starts so workers never race on the first build.

use rayon::prelude::*;

use crate::api;
use crate::dispatch::GenerationRequest;
use crate::index_error::IndexError;
use crate::indices::slice::{IndexSlice, IndexSliceMut};

/// One draw in a batch: its request, optional input and owned output view.
#[derive(Debug)]
pub struct BatchJob<'a> {
    pub request: GenerationRequest,
    pub input: Option<IndexSlice<'a>>,
    pub output: IndexSliceMut<'a>,
}

impl<'a> BatchJob<'a> {
    pub fn translate(
        request: GenerationRequest,
        input: IndexSlice<'a>,
        output: IndexSliceMut<'a>,
    ) -> Self {
        Self {
            request,
            input: Some(input),
            output,
        }
    }

    pub fn generate(request: GenerationRequest, output: IndexSliceMut<'a>) -> Self {
        Self {
            request,
            input: None,
            output,
        }
    }
}

/// Run every job, returning one result per job in input order.
pub fn run_batch(jobs: &mut [BatchJob<'_>]) -> Vec<Result<(), IndexError>> {
    api::initialize();
    jobs.par_iter_mut()
        .map(|job| api::run(&job.request, job.input, job.output.reborrow()))
        .collect()
}
