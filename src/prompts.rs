pub mod self_intro;
