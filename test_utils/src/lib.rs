// SPDX-License-Identifier: MIT

pub mod arrays;
