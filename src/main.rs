fn main() {
    shape_swarm::game::run();
}
