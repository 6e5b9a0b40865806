mod park;
mod trail;
