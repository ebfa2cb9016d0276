mod beacon;
mod elements;
mod remote_id;
