pub mod a001_compte;
