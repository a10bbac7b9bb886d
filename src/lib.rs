/*
    swutool - A .swu OTA container inspector and chip-string scanner
    Copyright (C) 2025 plzdonthaxme

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//clippy config
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::wildcard_imports // this is only done for my own crates, others are specified
)]

use clap::Parser;

pub mod utils;
pub mod inspect;
pub mod chipscan;

#[derive(Parser, Debug, Clone)]
#[clap(author="@plzdonthaxme", version="0.1", about="A .swu OTA container inspector, made in Rust", disable_version_flag=true)]
pub struct Args {
    #[clap(help="Input filename", value_name="INPUT")]
    pub filename: String,
}
